//! # binfab
//!
//! Prefab object array ("binfab") decoding library.
//!
//! # Format Overview
//!
//! A binfab buffer is a flat stream of tagged elements:
//! - Each element starts with a base-128 varint header.
//! - The header is zig-zag resolved to a signed integer; its low 3 bits
//!   are the type tag, the remaining bits (arithmetic shift) the
//!   payload.
//! - Tags 0 and 1 are integers carried in the payload itself; tags 2, 3
//!   and 4 are followed by a little-endian float, a little-endian
//!   double, or a length-prefixed UTF-8 string.
//! - Tag 7 marks object structure: payload 1 ends the enclosing object,
//!   payload 2 opens a nested array.
//! - A raw `0x1E` byte between elements ends the current array; the top
//!   level otherwise ends at buffer exhaustion.
//!
//! ## Example
//!
//! ```
//! use binfab::Value;
//!
//! let bytes = binfab::encode_values(&[Value::Signed(7), Value::String("crit".into())]);
//! let (values, consumed) = binfab::decode(&bytes)?;
//!
//! assert_eq!(values[0], Value::Signed(7));
//! assert_eq!(consumed, bytes.len());
//! # Ok::<(), binfab::DecodeError>(())
//! ```

pub mod decode;
pub mod encode;
pub mod extract;
pub mod value;
pub mod varint;

// Re-export commonly used items
#[doc(inline)]
pub use decode::{
    decode, decode_with, DecodeError, DecodeOptions, Tag, MARKER_ARRAY_START,
    MARKER_END_OF_OBJECT, SENTINEL,
};
#[doc(inline)]
pub use encode::encode_values;
#[doc(inline)]
pub use extract::{damage_fields, extract_fields, ExtractedField, FieldSpec, DAMAGE_FIELDS};
#[doc(inline)]
pub use value::Value;
#[doc(inline)]
pub use varint::{read_varint, write_varint, zigzag_decode, zigzag_encode};
