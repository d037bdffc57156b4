//! Tagged-value decoder for prefab object arrays
//!
//! A prefab object array is a flat stream of tagged elements. Each
//! element starts with a varint header; the header is zig-zag resolved
//! and then split into a 3-bit type tag (low bits) and a payload (the
//! remaining bits, arithmetic shift). Integer elements carry their value
//! in the payload itself; floats, doubles and strings follow the header
//! as little-endian or length-prefixed payload bytes. Tag 7 marks object
//! boundaries: payload 1 ends the enclosing object, payload 2 opens a
//! nested array. A raw 0x1E byte between elements ends the current
//! array.
//!
//! Every read returns the decoded value together with the bytes it
//! consumed, so a parent level can resume after an embedded array. The
//! input buffer is never mutated and all reads are bounds-checked.

use crate::value::Value;
use crate::varint::{read_varint, zigzag_decode};

/// End-of-array sentinel byte, outside the tagged-header grammar.
pub const SENTINEL: u8 = 0x1E;

/// Tag-7 payload marking the end of the enclosing object.
pub const MARKER_END_OF_OBJECT: i64 = 1;

/// Tag-7 payload opening a nested array.
pub const MARKER_ARRAY_START: i64 = 2;

/// Errors from decoding a prefab object array.
///
/// Any of these aborts the decode; no partial sequence is returned.
/// Invalid UTF-8 in string payloads is not an error: it is recovered in
/// place with replacement characters (see [`Value::String`]).
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input truncated at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("varint at offset {offset} exceeds 64 bits")]
    VarintOverflow { offset: usize },

    #[error("unknown type tag {tag} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    #[error("unknown object marker payload {payload} at offset {offset}")]
    UnknownObjectMarker { payload: i64, offset: usize },

    #[error("nesting exceeds maximum depth {max}")]
    DepthLimit { max: usize },
}

/// Element type tag, the low 3 bits of a zig-zag resolved header.
///
/// Tags 5 and 6 are not part of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Signed = 0,
    Unsigned = 1,
    Float32 = 2,
    Float64 = 3,
    String = 4,
    Object = 7,
}

impl Tag {
    /// Map the low 3 bits of a header to a tag.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Tag::Signed),
            1 => Some(Tag::Unsigned),
            2 => Some(Tag::Float32),
            3 => Some(Tag::Float64),
            4 => Some(Tag::String),
            7 => Some(Tag::Object),
            _ => None,
        }
    }
}

/// Decode-time resource limits.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum structural nesting depth below the top-level sequence.
    /// 0 permits only a flat sequence.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// One zig-zag resolved element header.
#[derive(Debug, Clone, Copy)]
struct Header {
    tag_bits: u8,
    payload: i64,
}

/// Read and resolve one tagged header at `offset`.
///
/// The zig-zag decode applies to the whole raw varint before the tag is
/// split out; tag extraction and the arithmetic payload shift operate on
/// the same signed integer.
fn read_header(data: &[u8], offset: usize) -> Result<(Header, usize), DecodeError> {
    let (raw, consumed) = read_varint(data, offset)?;
    let resolved = zigzag_decode(raw);
    let header = Header {
        tag_bits: (resolved & 0x7) as u8,
        payload: resolved >> 3,
    };
    Ok((header, consumed))
}

/// Fetch exactly N payload bytes at `offset`.
fn scalar_bytes<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    data.get(offset..offset + N)
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or(DecodeError::Truncated {
            offset,
            needed: N,
            available: data.len().saturating_sub(offset),
        })
}

/// Read a little-endian IEEE-754 single at `offset`.
fn read_f32(data: &[u8], offset: usize) -> Result<(f32, usize), DecodeError> {
    let bytes = scalar_bytes::<4>(data, offset)?;
    Ok((f32::from_le_bytes(bytes), 4))
}

/// Read a little-endian IEEE-754 double at `offset`.
fn read_f64(data: &[u8], offset: usize) -> Result<(f64, usize), DecodeError> {
    let bytes = scalar_bytes::<8>(data, offset)?;
    Ok((f64::from_le_bytes(bytes), 8))
}

/// Read a length-prefixed UTF-8 string at `offset`.
///
/// The length prefix is a raw varint byte count, not zig-zagged and not
/// a character count. Invalid UTF-8 does not fail the decode: bad
/// subsequences become U+FFFD and decoding continues.
fn read_string(data: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    let (raw_len, len_size) = read_varint(data, offset)?;
    let start = offset + len_size;
    let available = data.len().saturating_sub(start);

    // Checked against the remaining buffer before any allocation; a
    // hostile length prefix must not reserve memory.
    if raw_len > available as u64 {
        return Err(DecodeError::Truncated {
            offset: start,
            needed: raw_len as usize,
            available,
        });
    }
    let len = raw_len as usize;

    let bytes = &data[start..start + len];
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(err) => {
            tracing::warn!(
                offset = start,
                error = %err,
                "invalid UTF-8 in string payload, substituting replacement characters"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    Ok((text, len_size + len))
}

/// Decode a prefab object array with default limits.
///
/// Returns the decoded top-level sequence and the number of bytes
/// consumed. A complete buffer is normally consumed entirely; the count
/// matters when the stream ends with a terminator or when a caller
/// resumes behind an embedded array.
pub fn decode(data: &[u8]) -> Result<(Vec<Value>, usize), DecodeError> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode a prefab object array with explicit limits.
pub fn decode_with(
    data: &[u8],
    options: &DecodeOptions,
) -> Result<(Vec<Value>, usize), DecodeError> {
    decode_level(data, 0, 0, options)
}

/// Decode one nesting level starting at `start`.
///
/// Stops at an end-of-object header, an end-of-array sentinel, or buffer
/// exhaustion, and reports the bytes consumed at this level including
/// any terminator byte.
fn decode_level(
    data: &[u8],
    start: usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<(Vec<Value>, usize), DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::DepthLimit {
            max: options.max_depth,
        });
    }

    let mut values = Vec::new();
    let mut cursor = start;

    while cursor < data.len() {
        let header_offset = cursor;
        let (header, header_len) = read_header(data, cursor)?;
        cursor += header_len;

        let Some(tag) = Tag::from_bits(header.tag_bits) else {
            return Err(DecodeError::UnknownTag {
                tag: header.tag_bits,
                offset: header_offset,
            });
        };

        match tag {
            // Both integer tags carry the already zig-zag resolved
            // payload; the unsigned tag is kept distinct even though the
            // stream resolves it identically.
            Tag::Signed => values.push(Value::Signed(header.payload)),
            Tag::Unsigned => values.push(Value::Unsigned(header.payload)),
            Tag::Float32 => {
                let (value, consumed) = read_f32(data, cursor)?;
                values.push(Value::Float32(value));
                cursor += consumed;
            }
            Tag::Float64 => {
                let (value, consumed) = read_f64(data, cursor)?;
                values.push(Value::Float64(value));
                cursor += consumed;
            }
            Tag::String => {
                let (value, consumed) = read_string(data, cursor)?;
                values.push(Value::String(value));
                cursor += consumed;
            }
            Tag::Object => match header.payload {
                // The end-of-object header belongs to this level;
                // nothing after it is ours.
                MARKER_END_OF_OBJECT => return Ok((values, cursor - start)),
                MARKER_ARRAY_START => {
                    let (nested, consumed) = decode_level(data, cursor, depth + 1, options)?;
                    values.push(Value::Array(nested));
                    cursor += consumed;
                }
                payload => {
                    return Err(DecodeError::UnknownObjectMarker {
                        payload,
                        offset: header_offset,
                    });
                }
            },
        }

        // A raw sentinel between elements ends the current array; the
        // byte counts toward this level's consumed length.
        if cursor < data.len() && data[cursor] == SENTINEL {
            cursor += 1;
            break;
        }
    }

    Ok((values, cursor - start))
}
