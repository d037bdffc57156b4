//! Wire encoder for prefab object arrays
//!
//! Mirrors the decoder: headers are packed from payload and tag, zig-zag
//! folded, and varint encoded; scalar payloads are little-endian;
//! strings carry a raw varint byte-count prefix. Nested arrays are
//! wrapped in an array-start marker and closed with the sentinel byte,
//! which doubles as the single-byte end-of-object header.

use crate::decode::{Tag, MARKER_ARRAY_START, SENTINEL};
use crate::value::Value;
use crate::varint::{write_varint, zigzag_encode};

/// Encode a sequence of values as a prefab object array.
///
/// The top level is written without a terminator, matching a stream
/// that ends at buffer exhaustion; nested arrays are terminated with
/// the sentinel byte.
pub fn encode_values(values: &[Value]) -> Vec<u8> {
    let mut out = Vec::new();
    for value in values {
        push_value(&mut out, value);
    }
    out
}

fn push_header(out: &mut Vec<u8>, tag: Tag, payload: i64) {
    let header = (payload << 3) | i64::from(tag as u8);
    write_varint(out, zigzag_encode(header));
}

fn push_value(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Signed(v) => push_header(out, Tag::Signed, *v),
        Value::Unsigned(v) => push_header(out, Tag::Unsigned, *v),
        Value::Float32(v) => {
            push_header(out, Tag::Float32, 0);
            out.extend_from_slice(&v.to_le_bytes());
        }
        Value::Float64(v) => {
            push_header(out, Tag::Float64, 0);
            out.extend_from_slice(&v.to_le_bytes());
        }
        Value::String(s) => {
            push_header(out, Tag::String, 0);
            write_varint(out, s.len() as u64);
            out.extend_from_slice(s.as_bytes());
        }
        Value::Array(items) => {
            push_header(out, Tag::Object, MARKER_ARRAY_START);
            for item in items {
                push_value(out, item);
            }
            out.push(SENTINEL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_packs_to_single_zero_byte() {
        assert_eq!(encode_values(&[Value::Signed(0)]), vec![0x00]);
    }

    #[test]
    fn test_empty_array_is_marker_and_sentinel() {
        // Array start packs to header 23, zig-zag 46.
        assert_eq!(encode_values(&[Value::Array(vec![])]), vec![0x2E, 0x1E]);
    }

    #[test]
    fn test_string_layout() {
        let bytes = encode_values(&[Value::String("hi".into())]);
        assert_eq!(bytes, vec![0x08, 0x02, b'h', b'i']);
    }

    #[test]
    fn test_top_level_has_no_terminator() {
        let bytes = encode_values(&[Value::Signed(5), Value::Unsigned(1)]);
        assert_eq!(bytes.last(), Some(&0x12));
    }
}
