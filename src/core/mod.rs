//! # Core Wire Primitives
//!
//! Bit-exact encodings for OpenPGP wire fields and the constant-time bit
//! operations used by block-cipher modes.
//!
//! ## Components
//! - **Bits**: bit-length arithmetic over small integers
//! - **Constant-time**: GF(2^n) doubling and in-place right shift
//! - **Numeric**: big-endian integers and 4-byte timestamps
//! - **MPI**: multi-precision-integer framing and left-bit truncation
//! - **Checksum**: 16-bit running sum for legacy secret-key bodies
//!
//! ## Wire Formats
//! ```text
//! MPI:       [BitCount(2, BE)] [Magnitude(ceil(bits/8), BE, no leading zero byte)]
//! Timestamp: [Seconds(4, BE)]
//! Checksum:  [Sum mod 65536 (2, BE)]
//! ```
//!
//! All functions here are synchronous and allocate at most their output.

pub mod bits;
pub mod checksum;
pub mod consttime;
pub mod mpi;
pub mod numeric;
