//! Transfer planning metrics
//!
//! Atomic counters describing how often payloads were planned for zero-copy
//! transfer and how much data moved without copying.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Counters for [`crate::transfer::TransferPlanner`]
#[derive(Debug)]
pub struct TransferMetrics {
    /// Total plan requests
    pub plans_total: AtomicU64,
    /// Plans skipped because the policy or host disallowed transfer
    pub plans_skipped: AtomicU64,
    /// Plans whose payload held no byte sequences
    pub plans_empty: AtomicU64,
    /// Distinct buffers listed for transfer
    pub buffers_listed: AtomicU64,
    /// Bytes in listed buffers
    pub bytes_listed: AtomicU64,
    start_time: Instant,
}

impl TransferMetrics {
    pub fn new() -> Self {
        Self {
            plans_total: AtomicU64::new(0),
            plans_skipped: AtomicU64::new(0),
            plans_empty: AtomicU64::new(0),
            buffers_listed: AtomicU64::new(0),
            bytes_listed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a plan refused by policy or host capability
    pub fn plan_skipped(&self) {
        self.plans_total.fetch_add(1, Ordering::Relaxed);
        self.plans_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a plan that found nothing to transfer
    pub fn plan_empty(&self) {
        self.plans_total.fetch_add(1, Ordering::Relaxed);
        self.plans_empty.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a plan that listed buffers
    pub fn plan_listed(&self, buffers: u64, bytes: u64) {
        self.plans_total.fetch_add(1, Ordering::Relaxed);
        self.buffers_listed.fetch_add(buffers, Ordering::Relaxed);
        self.bytes_listed.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            plans_total: self.plans_total.load(Ordering::Relaxed),
            plans_skipped: self.plans_skipped.load(Ordering::Relaxed),
            plans_empty: self.plans_empty.load(Ordering::Relaxed),
            buffers_listed: self.buffers_listed.load(Ordering::Relaxed),
            bytes_listed: self.bytes_listed.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            plans_total = snapshot.plans_total,
            plans_skipped = snapshot.plans_skipped,
            plans_empty = snapshot.plans_empty,
            buffers_listed = snapshot.buffers_listed,
            bytes_listed = snapshot.bytes_listed,
            uptime_seconds = snapshot.uptime_seconds,
            "Transfer metrics snapshot"
        );
    }
}

impl Default for TransferMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub plans_total: u64,
    pub plans_skipped: u64,
    pub plans_empty: u64,
    pub buffers_listed: u64,
    pub bytes_listed: u64,
    pub uptime_seconds: u64,
}
