//! Multi-precision integer framing.
//!
//! An MPI is a 2-byte big-endian bit count followed by the minimal
//! big-endian magnitude. The bit count is always derived from the real
//! leading byte.

use crate::core::bits::{bit_length, bytes_for_bits};
use crate::core::consttime::shift_right;
use crate::error::{constants, Result, UtilError};
use bytes::{Buf, BufMut};

/// Length of the MPI bit-count prefix
pub const MPI_PREFIX_LEN: usize = 2;

/// Bit count an MPI of `magnitude` declares
pub fn mpi_bit_count(magnitude: &[u8]) -> Result<usize> {
    let (&lead, _) = magnitude
        .split_first()
        .ok_or_else(|| UtilError::contract(constants::ERR_MPI_EMPTY))?;
    if lead == 0 {
        return Err(UtilError::contract(constants::ERR_MPI_LEADING_ZERO));
    }
    Ok(8 * (magnitude.len() - 1) + bit_length(u32::from(lead)) as usize)
}

/// Frame a big-endian magnitude as an MPI.
///
/// The magnitude must be non-empty, must not start with a zero byte, and must
/// be at most 65535 bits long.
pub fn to_mpi(magnitude: &[u8]) -> Result<Vec<u8>> {
    let bits = mpi_bit_count(magnitude)?;
    let prefix = u16::try_from(bits).map_err(|_| {
        UtilError::ContractViolation(format!(
            "MPI of {bits} bits does not fit the 16-bit length prefix"
        ))
    })?;

    let mut out = Vec::with_capacity(MPI_PREFIX_LEN + magnitude.len());
    out.put_u16(prefix);
    out.put_slice(magnitude);
    Ok(out)
}

/// Read one MPI from the front of `input`.
///
/// Returns the magnitude and the number of bytes consumed, so callers can
/// walk a sequence of MPIs. The declared bit count is trusted for framing
/// only; the magnitude is returned as stored.
pub fn read_mpi(input: &[u8]) -> Result<(Vec<u8>, usize)> {
    let mut buf = input;
    if buf.remaining() < MPI_PREFIX_LEN {
        return Err(UtilError::InvalidEncoding(format!(
            "MPI prefix needs {MPI_PREFIX_LEN} bytes, got {}",
            buf.remaining()
        )));
    }
    let bits = usize::from(buf.get_u16());
    let len = bytes_for_bits(bits);
    if buf.remaining() < len {
        return Err(UtilError::encoding(constants::ERR_MPI_TRUNCATED));
    }
    Ok((buf[..len].to_vec(), MPI_PREFIX_LEN + len))
}

/// Leftmost `bit_count` bits of `bytes` as a big-endian integer.
///
/// The result is `ceil(bit_count / 8)` bytes long. When `bit_count` is not a
/// multiple of 8 the kept prefix is shifted right with the constant-time
/// [`shift_right`], which zero-fills the vacated top bits of the first byte.
/// This is the truncation used when deriving curve-order-sized scalars from
/// digests, so it must not branch on the data. The input is never modified.
pub fn take_left_bits(bytes: &[u8], bit_count: usize) -> Result<Vec<u8>> {
    if bit_count > 8 * bytes.len() {
        return Err(UtilError::ContractViolation(format!(
            "cannot take {bit_count} bits from {} bytes",
            bytes.len()
        )));
    }
    let mut out = bytes[..bytes_for_bits(bit_count)].to_vec();
    let spare = ((8 - bit_count % 8) % 8) as u32;
    shift_right(&mut out, spare)?;
    Ok(out)
}
