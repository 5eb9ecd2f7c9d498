//! # Error Types
//!
//! Error handling for the wire codecs and the transfer planner.
//!
//! Every codec in this crate is a pure, synchronous function: it either
//! produces its full result or fails immediately with one of the variants
//! below. No partial output is ever returned.
//!
//! ## Error Categories
//! - **Invalid Encoding**: malformed hex, base64, text or MPI framing
//! - **Contract Violations**: wrong argument shape (caller bug, not recoverable)
//! - **Configuration Errors**: config loading and validation failures
//! - **I/O Errors**: file access while loading configuration
//!
//! A missing host capability is never an error. Capability checks return
//! `None` instead (see [`crate::transfer::plan_transfer`]).
//!
//! ## Example Usage
//! ```rust
//! use pgp_wire_util::encoding::hex::hex_to_bytes;
//! use pgp_wire_util::error::{Result, UtilError};
//! use tracing::{error, info};
//!
//! fn parse_fingerprint(text: &str) -> Result<Vec<u8>> {
//!     let bytes = hex_to_bytes(text)?;
//!     if bytes.len() != 20 {
//!         return Err(UtilError::ContractViolation(format!(
//!             "fingerprint must be 20 bytes, got {}",
//!             bytes.len()
//!         )));
//!     }
//!     Ok(bytes)
//! }
//!
//! match parse_fingerprint("zz") {
//!     Ok(fpr) => info!(len = fpr.len(), "parsed fingerprint"),
//!     Err(e) => error!(error = %e, "bad fingerprint"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// MPI errors
    pub const ERR_MPI_EMPTY: &str = "MPI source must not be empty";
    pub const ERR_MPI_LEADING_ZERO: &str = "MPI source must not start with a zero byte";
    pub const ERR_MPI_TRUNCATED: &str = "MPI magnitude shorter than its declared bit count";

    /// Constant-time primitive errors
    pub const ERR_SHIFT_RANGE: &str = "shift amount must be smaller than 8 bits";
    pub const ERR_DOUBLE_EMPTY: &str = "cannot double an empty block";

    /// Numeric codec errors
    pub const ERR_NUMBER_TOO_WIDE: &str = "value does not fit in 64 bits";

    /// Text transcoding errors
    pub const ERR_INVALID_HEX: &str = "Invalid hex string";
    pub const ERR_INVALID_BASE64: &str = "Invalid base64 string";
    pub const ERR_INVALID_UTF8: &str = "Input is not valid UTF-8";
}

/// Primary error type for every operation in this crate
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum UtilError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl UtilError {
    /// Build a contract violation from a static message without allocating at the call site
    pub(crate) fn contract(msg: &str) -> Self {
        UtilError::ContractViolation(msg.to_string())
    }

    /// Build an encoding error from a static message
    pub(crate) fn encoding(msg: &str) -> Self {
        UtilError::InvalidEncoding(msg.to_string())
    }

    /// Returns true when the failure is a caller bug rather than bad input data
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, UtilError::ContractViolation(_))
    }
}

/// Type alias for Results using UtilError
pub type Result<T> = std::result::Result<T, UtilError>;
