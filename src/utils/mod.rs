//! # Utility Modules
//!
//! Supporting utilities for logging and observability.
//!
//! ## Components
//! - **Debug**: config-gated debug dumps through `tracing`
//! - **Metrics**: thread-safe counters for transfer planning

pub mod debug;
pub mod metrics;

pub use debug::DebugLog;
pub use metrics::{MetricsSnapshot, TransferMetrics};
