//! Base64URL encoding/decoding per RFC 4648
//!
//! Encoding never emits padding. Decoding accepts segments with or without
//! padding: missing `=` characters are appended until the length is a
//! multiple of four, then the padded URL-safe alphabet is applied. Unused
//! bits in the final symbol are ignored, so only characters outside the
//! alphabet (or an impossible length) fail to decode.

use crate::error::{Error, Result, Segment};
use base64::{
    alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD},
    Engine,
};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a Base64URL token segment, normalizing padding first
///
/// Decoded output larger than `max_size` is rejected.
pub fn decode_segment(input: &str, segment: Segment, max_size: usize) -> Result<Vec<u8>> {
    let bytes = URL_SAFE_LENIENT
        .decode(pad(input).as_bytes())
        .map_err(|e| Error::InvalidBase64 {
            segment,
            reason: e.to_string(),
        })?;

    if bytes.len() > max_size {
        return Err(Error::SegmentTooLarge {
            segment,
            size: bytes.len(),
            max: max_size,
        });
    }

    Ok(bytes)
}

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to unpadded Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

fn pad(input: &str) -> std::borrow::Cow<'_, str> {
    match input.len() % 4 {
        0 => input.into(),
        rem => {
            let mut padded = String::with_capacity(input.len() + 4 - rem);
            padded.push_str(input);
            padded.extend(std::iter::repeat('=').take(4 - rem));
            padded.into()
        }
    }
}
