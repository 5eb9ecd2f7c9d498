//! Constant-time bit operations.
//!
//! No branch, loop bound or early exit in this module depends on byte
//! values. Loop bounds depend only on slice lengths and on the shift amount,
//! which are public.

use crate::error::{constants, Result, UtilError};

/// Shift a byte string right by `bits` bits in place (`0 <= bits < 8`).
///
/// Each byte absorbs the low `bits` bits of its predecessor; the first byte
/// is zero-filled from the top.
pub fn shift_right(bytes: &mut [u8], bits: u32) -> Result<()> {
    if bits >= 8 {
        return Err(UtilError::contract(constants::ERR_SHIFT_RANGE));
    }
    // Widened so that bits == 0 carries nothing instead of overflowing the shift
    let carry_shift = 8 - bits;
    for i in (1..bytes.len()).rev() {
        let carried = ((u16::from(bytes[i - 1]) << carry_shift) & 0xFF) as u8;
        bytes[i] = (bytes[i] >> bits) | carried;
    }
    if let Some(first) = bytes.first_mut() {
        *first >>= bits;
    }
    Ok(())
}

/// Double a block in GF(2^(8·len)) using the 0x87 reduction.
///
/// `double(S) = (S << 1) xor (msb(S) · 0x87)` where the reduction is applied
/// to the last byte. Used by OCB offsets and CMAC subkeys.
pub fn double(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(UtilError::contract(constants::ERR_DOUBLE_EMPTY));
    }
    let mut out = vec![0u8; data.len()];
    double_into(data, &mut out);
    Ok(out)
}

/// Fixed-size [`double`] for 128-bit block modes
pub fn double_block(block: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    double_into(block, &mut out);
    out
}

#[inline]
fn double_into(data: &[u8], out: &mut [u8]) {
    let last = data.len() - 1;
    for i in 0..last {
        out[i] = (data[i] << 1) ^ (data[i + 1] >> 7);
    }
    // carry is 0 or 1, so the product selects 0x00 or 0x87 without a branch
    let carry = data[0] >> 7;
    out[last] = (data[last] << 1) ^ carry.wrapping_mul(0x87);
}

/// Compare two byte strings without exiting early on the first mismatch.
///
/// Lengths are treated as public.
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}
