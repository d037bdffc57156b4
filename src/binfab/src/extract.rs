//! Positional field extraction over a decoded top-level sequence
//!
//! The mapping from indices to attribute names is a static policy table
//! kept apart from the decoder, so it can be swapped without touching
//! decoding internals. Only the top-level sequence is indexed; nested
//! arrays are never entered.

use crate::value::Value;
use serde::Serialize;

/// One entry of a positional field map.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Index into the top-level decoded sequence.
    pub index: usize,
    /// Attribute name the element maps to.
    pub name: &'static str,
}

/// Damage attributes of a decoded prefab, by top-level position.
pub const DAMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        index: 1,
        name: "fixed_base_damage",
    },
    FieldSpec {
        index: 12,
        name: "base_damage_multiplier",
    },
    FieldSpec {
        index: 25,
        name: "cd_multiplier",
    },
];

/// A field resolved against a decoded sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedField<'a> {
    pub name: &'static str,
    pub index: usize,
    pub value: &'a Value,
}

/// Resolve a positional field map against a top-level sequence.
///
/// Indices beyond the end of the sequence are skipped; map order is
/// preserved in the result.
pub fn extract_fields<'a>(values: &'a [Value], map: &[FieldSpec]) -> Vec<ExtractedField<'a>> {
    map.iter()
        .filter_map(|spec| {
            values.get(spec.index).map(|value| ExtractedField {
                name: spec.name,
                index: spec.index,
                value,
            })
        })
        .collect()
}

/// Resolve the damage-field map.
pub fn damage_fields(values: &[Value]) -> Vec<ExtractedField<'_>> {
    extract_fields(values, DAMAGE_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sequence(len: usize) -> Vec<Value> {
        (0..len).map(|i| Value::Signed(i as i64 * 10)).collect()
    }

    #[test]
    fn test_damage_fields_full_sequence() {
        let values = sample_sequence(30);
        let fields = damage_fields(&values);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, "fixed_base_damage");
        assert_eq!(fields[0].index, 1);
        assert_eq!(fields[0].value, &Value::Signed(10));
        assert_eq!(fields[1].name, "base_damage_multiplier");
        assert_eq!(fields[1].value, &Value::Signed(120));
        assert_eq!(fields[2].name, "cd_multiplier");
        assert_eq!(fields[2].value, &Value::Signed(250));
    }

    #[test]
    fn test_short_sequence_skips_missing_indices() {
        let values = sample_sequence(13);
        let fields = damage_fields(&values);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "fixed_base_damage");
        assert_eq!(fields[1].name, "base_damage_multiplier");
    }

    #[test]
    fn test_nested_value_returned_without_recursion() {
        let mut values = sample_sequence(13);
        values[1] = Value::Array(vec![Value::Signed(99)]);
        let fields = damage_fields(&values);

        assert_eq!(fields[0].value, &Value::Array(vec![Value::Signed(99)]));
    }

    #[test]
    fn test_custom_map() {
        const MAP: &[FieldSpec] = &[
            FieldSpec {
                index: 0,
                name: "first",
            },
            FieldSpec {
                index: 2,
                name: "third",
            },
        ];
        let values = sample_sequence(3);
        let fields = extract_fields(&values, MAP);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "first");
        assert_eq!(fields[1].value, &Value::Signed(20));
    }
}
