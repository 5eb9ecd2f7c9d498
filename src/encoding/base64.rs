//! Radix-64 conversions backed by the `base64` crate.
//!
//! Decoding accepts the standard and URL-safe alphabets, with or without
//! padding, and skips ASCII whitespace left over from armor line wrapping.
//! Encoding never wraps lines; armor framing is done elsewhere.

use crate::error::{constants, Result, UtilError};
use ::base64::alphabet;
use ::base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use ::base64::Engine as _;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode standard or URL-safe base64
pub fn b64_to_bytes(text: &str) -> Result<Vec<u8>> {
    let normalized: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    LENIENT
        .decode(normalized)
        .map_err(|e| UtilError::InvalidEncoding(format!("{}: {e}", constants::ERR_INVALID_BASE64)))
}

/// Encode as base64.
///
/// `url_safe` selects the `-`/`_` alphabet without padding, as used in JWK
/// fields; otherwise the padded standard alphabet is used.
pub fn bytes_to_b64(bytes: &[u8], url_safe: bool) -> String {
    if url_safe {
        URL_SAFE_NO_PAD.encode(bytes)
    } else {
        STANDARD.encode(bytes)
    }
}
