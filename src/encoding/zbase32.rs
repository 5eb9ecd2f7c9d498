//! Z-Base32 (RFC 6189 §5.1.6), used for Web Key Directory local-part hashes.
//!
//! Five bits per symbol, most significant bit first, no padding. The final
//! symbol is zero-filled on the right when the input bit count is not a
//! multiple of five.

use crate::error::{Result, UtilError};

const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";
const SHIFT: u32 = 5;
const MASK: u32 = 0x1F;
const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encode bytes as Z-Base32. Empty input gives an empty string.
pub fn encode_zbase32(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits_left: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits_left += 8;
        while bits_left >= SHIFT {
            bits_left -= SHIFT;
            out.push(char::from(ALPHABET[((buffer >> bits_left) & MASK) as usize]));
        }
    }
    if bits_left > 0 {
        let index = (buffer << (SHIFT - bits_left)) & MASK;
        out.push(char::from(ALPHABET[index as usize]));
    }
    out
}

/// Decode unpadded Z-Base32.
///
/// Rejects characters outside the alphabet, lengths no encoder produces, and
/// non-zero fill bits in the final symbol.
pub fn decode_zbase32(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits_left: u32 = 0;

    for (pos, ch) in text.bytes().enumerate() {
        let value = DECODE_TABLE[usize::from(ch)];
        if value == INVALID {
            return Err(UtilError::InvalidEncoding(format!(
                "invalid z-base32 character at position {pos}"
            )));
        }
        buffer = (buffer << SHIFT) | u32::from(value);
        bits_left += SHIFT;
        if bits_left >= 8 {
            bits_left -= 8;
            out.push(((buffer >> bits_left) & 0xFF) as u8);
        }
    }

    if bits_left >= SHIFT {
        return Err(UtilError::InvalidEncoding(format!(
            "z-base32 length {} is not produced by any input",
            text.len()
        )));
    }
    if buffer & ((1 << bits_left) - 1) != 0 {
        return Err(UtilError::InvalidEncoding(
            "z-base32 trailing fill bits are not zero".to_string(),
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode_zbase32(&[]), "");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode_zbase32(&[0x00]), "yy");
        assert_eq!(encode_zbase32(&[0xFF]), "9h");
        assert_eq!(encode_zbase32(&[0xF0, 0xBF, 0xC7]), "6n9hq");
        assert_eq!(encode_zbase32(&[0xD4, 0x7A, 0x04]), "4t7ye");
        assert_eq!(encode_zbase32(b"hello"), "pb1sa5dx");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_wkd_local_part_hash() {
        // SHA-1("joe.doe") from the Web Key Directory draft
        let digest = crate::encoding::hex::hex_to_bytes("a83ee94be89c48a11ed25ab44cfdc848833c8b6e")
            .unwrap();
        assert_eq!(encode_zbase32(&digest), "iy9q119eutrkn8s1mk4r39qejnbu3n5q");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_decode_known_vectors() {
        assert_eq!(decode_zbase32("6n9hq").unwrap(), vec![0xF0, 0xBF, 0xC7]);
        assert_eq!(decode_zbase32("pb1sa5dx").unwrap(), b"hello".to_vec());
        assert_eq!(decode_zbase32("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode_zbase32("0").is_err());
        assert!(decode_zbase32("y").is_err());
        // "yb" leaves two fill bits set to 01
        assert!(decode_zbase32("yb").is_err());
    }
}
