//! Big-endian integer and timestamp codecs.
//!
//! OpenPGP stores lengths, key ids and creation times as fixed-width
//! big-endian unsigned fields. Timestamps are 4-byte seconds since the Unix
//! epoch.

use crate::error::{constants, Result, UtilError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Width of an OpenPGP timestamp field
pub const TIMESTAMP_LEN: usize = 4;

/// Interpret `bytes` as a big-endian unsigned integer.
///
/// Leading zero bytes are accepted at any length. A value that needs more
/// than 64 bits is a contract violation.
pub fn decode_be_unsigned(bytes: &[u8]) -> Result<u64> {
    let significant = match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => &[],
    };
    if significant.len() > 8 {
        return Err(UtilError::contract(constants::ERR_NUMBER_TOO_WIDE));
    }
    Ok(significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Encode `value` as exactly `width` big-endian bytes.
///
/// Widths above 8 are zero-padded on the left. A value that does not fit in
/// `width` bytes is rejected instead of being truncated.
pub fn encode_be_unsigned(value: u64, width: usize) -> Result<Vec<u8>> {
    let fits = match u32::try_from(8 * width) {
        Ok(bits) => value.checked_shr(bits).map_or(true, |rest| rest == 0),
        Err(_) => true,
    };
    if !fits {
        return Err(UtilError::ContractViolation(format!(
            "value {value} does not fit in {width} bytes"
        )));
    }

    let mut out = vec![0u8; width];
    for (i, byte) in out.iter_mut().enumerate() {
        let shift = 8 * (width - 1 - i);
        *byte = u32::try_from(shift)
            .ok()
            .and_then(|s| value.checked_shr(s))
            .map_or(0, |v| (v & 0xFF) as u8);
    }
    Ok(out)
}

/// Decode a big-endian seconds field into an instant
pub fn decode_timestamp(bytes: &[u8]) -> Result<SystemTime> {
    let secs = decode_be_unsigned(bytes)?;
    UNIX_EPOCH
        .checked_add(Duration::from_secs(secs))
        .ok_or_else(|| UtilError::ContractViolation(format!("timestamp {secs} out of range")))
}

/// Encode an instant as a 4-byte timestamp field.
///
/// Sub-second precision is floored away. Instants beyond 2^32 - 1 seconds (or
/// before the epoch) wrap modulo 2^32, as the wire field cannot hold them.
pub fn encode_timestamp(time: SystemTime) -> [u8; TIMESTAMP_LEN] {
    (floor_secs(time) as u32).to_be_bytes()
}

/// Floor an instant to whole seconds; `None` passes through unchanged.
pub fn normalize_timestamp(time: Option<SystemTime>) -> Option<SystemTime> {
    time.map(floor_to_second)
}

/// Current time floored to whole seconds
pub fn normalize_now() -> SystemTime {
    floor_to_second(SystemTime::now())
}

fn floor_to_second(time: SystemTime) -> SystemTime {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => UNIX_EPOCH + Duration::from_secs(since.as_secs()),
        Err(before) => {
            let before = before.duration();
            let whole = Duration::from_secs(before.as_secs());
            let floored = if before.subsec_nanos() > 0 {
                whole + Duration::from_secs(1)
            } else {
                whole
            };
            UNIX_EPOCH.checked_sub(floored).unwrap_or(time)
        }
    }
}

/// Whole seconds relative to the epoch, rounded towards negative infinity
fn floor_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}
