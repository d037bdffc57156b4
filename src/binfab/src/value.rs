//! Decoded value model for prefab object arrays

use serde::Serialize;
use std::fmt;

/// One decoded element of a prefab object array.
///
/// `Signed` and `Unsigned` mirror the two integer type tags on the wire.
/// The stream zig-zag resolves every header before the tag is split out,
/// so both variants carry the same signed payload; they stay distinct
/// because consumers may branch on tag identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Signed(i64),
    Unsigned(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    /// Wire-level type name, for diagnostics and inspect output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Signed(_) => "int",
            Value::Unsigned(_) => "uint",
            Value::Float32(_) => "float",
            Value::Float64(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Signed(v) | Value::Unsigned(v) => Some(*v as f64),
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            Value::String(_) | Value::Array(_) => None,
        }
    }

    /// Nested sequence view, if this element is one.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Signed(v) | Value::Unsigned(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Signed(1).type_name(), "int");
        assert_eq!(Value::Unsigned(1).type_name(), "uint");
        assert_eq!(Value::Float32(1.0).type_name(), "float");
        assert_eq!(Value::Float64(1.0).type_name(), "double");
        assert_eq!(Value::String("x".into()).type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Signed(-3).as_f64(), Some(-3.0));
        assert_eq!(Value::Unsigned(7).as_f64(), Some(7.0));
        assert_eq!(Value::Float32(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Float64(2.25).as_f64(), Some(2.25));
        assert_eq!(Value::String("1".into()).as_f64(), None);
        assert_eq!(Value::Array(vec![]).as_f64(), None);
    }

    #[test]
    fn test_display_nested() {
        let value = Value::Array(vec![
            Value::Signed(1),
            Value::String("hi".into()),
            Value::Array(vec![Value::Float64(0.5)]),
        ]);
        assert_eq!(value.to_string(), "[1, \"hi\", [0.5]]");
    }

    #[test]
    fn test_serialize_untagged() {
        let value = Value::Array(vec![
            Value::Signed(-2),
            Value::Unsigned(3),
            Value::String("dmg".into()),
        ]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!([-2, 3, "dmg"]));
    }
}
