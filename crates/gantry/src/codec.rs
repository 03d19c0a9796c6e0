//! URL component encoding
//!
//! Matches JavaScript's `encodeURIComponent`/`decodeURIComponent`: everything
//! except ASCII alphanumerics and `-_.!~*'()` is percent-encoded as UTF-8.

use gantry_core::CodecError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Direction of a codec run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Verb shown before the input, e.g. `encoding: a b`
    pub fn verb(self) -> &'static str {
        match self {
            Self::Encode => "encoding",
            Self::Decode => "decoding",
        }
    }

    pub fn apply(self, input: &str) -> Result<String, CodecError> {
        match self {
            Self::Encode => Ok(encode_component(input)),
            Self::Decode => decode_component(input),
        }
    }
}

/// Percent-encode a URL component
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_SET).to_string()
}

/// Decode percent escapes; `+` is left alone
pub fn decode_component(input: &str) -> Result<String, CodecError> {
    Ok(percent_decode_str(input).decode_utf8()?.into_owned())
}
