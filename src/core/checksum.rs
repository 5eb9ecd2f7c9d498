//! 16-bit additive checksum used by legacy (S2K usage 255) secret-key bodies.

use crate::core::consttime::equals;

/// Sum of all byte values modulo 65536
pub fn calc_checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b)))
}

/// Incremental form of [`calc_checksum`] for bodies parsed in pieces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    sum: u16,
}

impl Checksum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add more bytes to the running sum
    pub fn update(&mut self, bytes: &[u8]) {
        self.sum = self.sum.wrapping_add(calc_checksum(bytes));
    }

    pub fn value(&self) -> u16 {
        self.sum
    }

    /// Big-endian wire form of the sum
    pub fn to_bytes(&self) -> [u8; 2] {
        self.sum.to_be_bytes()
    }

    /// Check the running sum against a stored 2-byte field without an
    /// early exit on the first differing byte
    pub fn verify(&self, stored: &[u8]) -> bool {
        equals(stored, &self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calc_checksum(&[]), 0);
    }

    #[test]
    fn test_small_sum() {
        assert_eq!(calc_checksum(&[0xFF, 0xFF]), 510);
    }

    #[test]
    fn test_wraps_modulo_65536() {
        // 258 * 255 = 65790 = 65536 + 254
        let data = vec![0xFF; 258];
        assert_eq!(calc_checksum(&data), 254);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let data: Vec<u8> = (0..=255).cycle().take(1000).collect();
        let mut checksum = Checksum::new();
        for chunk in data.chunks(37) {
            checksum.update(chunk);
        }
        assert_eq!(checksum.value(), calc_checksum(&data));
        assert!(checksum.verify(&calc_checksum(&data).to_be_bytes()));
        assert!(!checksum.verify(&[0, 0, 0]));
    }

    #[test]
    fn test_verify_checks_both_bytes() {
        let mut checksum = Checksum::new();
        checksum.update(&[0x01, 0xFF, 0xFF]);
        assert_eq!(checksum.to_bytes(), [0x01, 0xFF]);
        assert!(checksum.verify(&[0x01, 0xFF]));
        assert!(!checksum.verify(&[0x00, 0xFF]));
        assert!(!checksum.verify(&[0x01, 0xFE]));
        assert!(!checksum.verify(&[]));
    }
}
