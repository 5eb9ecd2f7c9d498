//! # Zero-Copy Buffer Transfer
//!
//! Prepares job payloads for dispatch to crypto worker threads so that large
//! binary fields move with the message instead of being copied or
//! serialized.
//!
//! ## Components
//! - **Buffer / ByteView**: shared backing allocations and windows into them
//! - **Payload**: the job description tree sent to a worker
//! - **Planner**: walks a payload and lists each distinct backing buffer once
//!
//! ## Ownership
//! The planner only computes the list. It keeps no handles after returning.
//! The caller moves the payload and its [`TransferList`] to the receiver,
//! after which the sender has no view of those buffers. Posting the same
//! buffer in two concurrent transfers is a caller bug; nothing here
//! synchronises against it.
//!
//! ## Example
//! ```rust
//! use pgp_wire_util::transfer::{plan_transfer, Buffer, Payload};
//!
//! let key = Buffer::new(vec![0u8; 64]);
//! let job = Payload::map()
//!     .with("algo", "ed25519")
//!     .with("secret", key.slice(0..32).unwrap())
//!     .with("public", key.slice(32..64).unwrap());
//!
//! let list = plan_transfer(&job, true, true).unwrap();
//! assert_eq!(list.len(), 1);
//! ```

pub mod buffer;
pub mod payload;
pub mod planner;

pub use buffer::{Buffer, BufferId, ByteView};
pub use payload::{Payload, Scalar};
pub use planner::{collect_buffers, plan_transfer, OutboundMessage, TransferList, TransferPlanner};
