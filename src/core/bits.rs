/// Bit length of `x`: the 1-based index of its highest set bit.
///
/// `bit_length(0)` is `0`. MPI producers never reach that case because they
/// reject a zero leading byte before calling this.
#[inline]
pub const fn bit_length(x: u32) -> u32 {
    u32::BITS - x.leading_zeros()
}

/// Number of bytes needed to hold `bits` bits
#[inline]
pub const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_length_of_zero_is_zero() {
        assert_eq!(bit_length(0), 0);
    }

    #[test]
    fn test_bit_length_powers_of_two() {
        for shift in 0..32 {
            assert_eq!(bit_length(1 << shift), shift + 1);
        }
    }

    #[test]
    fn test_bit_length_bytes() {
        assert_eq!(bit_length(0x01), 1);
        assert_eq!(bit_length(0x7F), 7);
        assert_eq!(bit_length(0x80), 8);
        assert_eq!(bit_length(0xFF), 8);
        assert_eq!(bit_length(0x1_0000), 17);
        assert_eq!(bit_length(u32::MAX), 32);
    }

    #[test]
    fn test_bytes_for_bits() {
        assert_eq!(bytes_for_bits(0), 0);
        assert_eq!(bytes_for_bits(1), 1);
        assert_eq!(bytes_for_bits(8), 1);
        assert_eq!(bytes_for_bits(9), 2);
        assert_eq!(bytes_for_bits(521), 66);
    }
}
