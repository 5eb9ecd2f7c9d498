//! # pgp-wire-util
//!
//! Byte- and bit-level building blocks for an OpenPGP implementation.
//!
//! ## Modules
//! - [`core`]: big-endian integers, timestamps, MPIs, checksums and the
//!   constant-time `double`/`shift_right` used by OCB and EAX
//! - [`encoding`]: hex, base64, Z-Base32 and binary-string/UTF-8 conversions
//! - [`transfer`]: zero-copy buffer transfer planning for worker dispatch
//! - [`config`], [`capabilities`]: explicit process policy and host capabilities
//! - [`utils`]: config-gated debug logging and transfer metrics
//!
//! Packet parsing, ciphers and worker lifecycle live elsewhere; this crate
//! only supplies the encodings and data-shape computations they rely on.
//!
//! ## Example
//! ```rust
//! use pgp_wire_util::core::mpi::{read_mpi, to_mpi};
//! use pgp_wire_util::encoding::zbase32::encode_zbase32;
//!
//! let framed = to_mpi(&[0x01, 0x00, 0x01]).unwrap();
//! assert_eq!(framed, [0x00, 0x11, 0x01, 0x00, 0x01]);
//! assert_eq!(read_mpi(&framed).unwrap().0, [0x01, 0x00, 0x01]);
//!
//! assert_eq!(encode_zbase32(b"hello"), "pb1sa5dx");
//! ```

#![deny(unsafe_code)]

pub mod capabilities;
pub mod config;
pub mod core;
pub mod encoding;
pub mod error;
pub mod transfer;
pub mod utils;

pub use capabilities::HostCapabilities;
pub use config::UtilConfig;
pub use error::{Result, UtilError};
pub use transfer::{plan_transfer, Payload, TransferList, TransferPlanner};
