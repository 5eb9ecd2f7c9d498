use crate::encoding::text::{bytes_to_str, str_to_bytes};
use crate::error::{constants, Result, UtilError};

/// Lowercase hex, two digits per byte, no separators
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Parse a hex string.
///
/// Odd lengths and non-hex characters are rejected.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    ::hex::decode(text)
        .map_err(|e| UtilError::InvalidEncoding(format!("{}: {e}", constants::ERR_INVALID_HEX)))
}

/// Hex of a binary string (one byte per character)
pub fn str_to_hex(binary: &str) -> String {
    bytes_to_hex(&str_to_bytes(binary))
}

/// Binary string from hex
pub fn hex_to_str(text: &str) -> Result<String> {
    Ok(bytes_to_str(&hex_to_bytes(text)?))
}
