//! Binary strings, UTF-8 round trips and line endings.
//!
//! A *binary string* holds one byte per character (code points 0..=255). It
//! is the interop form older packet code passes around; it is not a text
//! encoding.

use crate::error::{constants, Result, UtilError};
use tracing::trace;

/// Binary string to bytes. Code points above 255 keep only their low 8 bits.
pub fn str_to_bytes(binary: &str) -> Vec<u8> {
    binary.chars().map(|c| (u32::from(c) & 0xFF) as u8).collect()
}

/// Bytes to binary string, one character per byte
pub fn bytes_to_str(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Native text to a binary string of its UTF-8 bytes
pub fn encode_utf8(text: &str) -> String {
    bytes_to_str(text.as_bytes())
}

/// Binary string of UTF-8 bytes back to native text.
///
/// If the input is not a well-formed UTF-8 byte string it is returned
/// unchanged. Legacy keys carry user ids in Latin-1 and other non-standard
/// encodings, and key handling relies on getting those back as-is.
pub fn decode_utf8(binary: &str) -> String {
    if binary.chars().any(|c| u32::from(c) > 0xFF) {
        trace!("decode_utf8 input is not a binary string, returning it unchanged");
        return binary.to_owned();
    }
    match String::from_utf8(str_to_bytes(binary)) {
        Ok(text) => text,
        Err(e) => {
            trace!(error = %e, "decode_utf8 fell back to the raw input");
            binary.to_owned()
        }
    }
}

/// Strict UTF-8 decoding of raw bytes
pub fn bytes_to_utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| UtilError::InvalidEncoding(format!("{}: {e}", constants::ERR_INVALID_UTF8)))
}

/// Normalize every line ending (`\r\n`, `\r`, `\n`) to `\r\n`
pub fn canonicalize_eol(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\r\n")
}

/// Convert canonical `\r\n` line endings to `\n`
pub fn native_eol(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Remove spaces and tabs at the end of every line.
///
/// A line ends before `\n`, `\r`, U+2028, U+2029 or the end of the input, so
/// `"x \r\n"` becomes `"x\r\n"`.
pub fn remove_trailing_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    for c in text.chars() {
        match c {
            ' ' | '\t' => pending.push(c),
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => {
                pending.clear();
                out.push(c);
            }
            _ => {
                out.push_str(&pending);
                pending.clear();
                out.push(c);
            }
        }
    }
    out
}
