//! Command handlers for binfab

pub mod decode;
pub mod fields;
pub mod inspect;

use binfab::DecodeOptions;

/// Build decode options, applying a CLI override on top of the defaults.
pub(crate) fn decode_options(max_depth: Option<usize>) -> DecodeOptions {
    let mut options = DecodeOptions::default();
    if let Some(depth) = max_depth {
        options.max_depth = depth;
    }
    options
}
