use crate::capabilities::HostCapabilities;
use crate::config::UtilConfig;
use crate::transfer::buffer::{Buffer, BufferId};
use crate::transfer::payload::Payload;
use crate::utils::metrics::TransferMetrics;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Distinct backing buffers found in a payload, in first-encountered order.
///
/// Receivers should treat it as a set. Holding the list keeps the buffers
/// alive; [`TransferList::into_buffers`] hands them over by move.
#[derive(Debug, Clone)]
pub struct TransferList {
    buffers: Vec<Buffer>,
}

impl TransferList {
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Always false for a list returned by the planner
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Buffer> {
        self.buffers.iter()
    }

    pub fn ids(&self) -> Vec<BufferId> {
        self.buffers.iter().map(Buffer::id).collect()
    }

    pub fn contains(&self, buffer: &Buffer) -> bool {
        self.buffers.iter().any(|b| b.same_buffer(buffer))
    }

    /// Sum of the listed buffers' sizes
    pub fn total_bytes(&self) -> usize {
        self.buffers.iter().map(Buffer::len).sum()
    }

    pub fn into_buffers(self) -> Vec<Buffer> {
        self.buffers
    }
}

impl IntoIterator for TransferList {
    type Item = Buffer;
    type IntoIter = std::vec::IntoIter<Buffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffers.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransferList {
    type Item = &'a Buffer;
    type IntoIter = std::slice::Iter<'a, Buffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffers.iter()
    }
}

/// Work out which buffers can be moved to a worker along with `payload`.
///
/// Returns `None` when the host cannot transfer buffers, when the zero-copy
/// policy is off, or when the payload holds no byte sequences at all.
pub fn plan_transfer(
    payload: &Payload,
    zero_copy_enabled: bool,
    host_supports_transfer: bool,
) -> Option<TransferList> {
    if !host_supports_transfer {
        trace!("host has no transfer-capable message passing");
        return None;
    }
    if !zero_copy_enabled {
        trace!("zero-copy transfer disabled by policy");
        return None;
    }
    let buffers = collect_buffers(payload);
    if buffers.is_empty() {
        return None;
    }
    Some(TransferList { buffers })
}

/// Depth-first walk collecting each distinct backing buffer once.
///
/// Uses an explicit stack so deeply nested payloads cannot overflow the call
/// stack. Children are pushed in reverse so they pop in document order.
pub fn collect_buffers(payload: &Payload) -> Vec<Buffer> {
    let mut seen: HashSet<BufferId> = HashSet::new();
    let mut buffers = Vec::new();
    let mut stack = vec![payload];

    while let Some(node) = stack.pop() {
        match node {
            Payload::Null | Payload::Scalar(_) => {}
            Payload::Bytes(view) => {
                let buffer = view.buffer();
                if seen.insert(buffer.id()) {
                    buffers.push(buffer.clone());
                }
            }
            Payload::List(items) => stack.extend(items.iter().rev()),
            Payload::Map(entries) => stack.extend(entries.iter().rev().map(|(_, value)| value)),
        }
    }
    buffers
}

/// Planner bound to the process policy and host capabilities
#[derive(Debug, Clone)]
pub struct TransferPlanner {
    zero_copy: bool,
    transfer_supported: bool,
    metrics: Arc<TransferMetrics>,
}

impl TransferPlanner {
    pub fn new(config: &UtilConfig, capabilities: &HostCapabilities) -> Self {
        Self {
            zero_copy: config.zero_copy,
            transfer_supported: capabilities.transfer_supported,
            metrics: Arc::new(TransferMetrics::new()),
        }
    }

    /// Share a metrics collector with other planners
    pub fn with_metrics(mut self, metrics: Arc<TransferMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Whether plans from this planner can ever list buffers
    pub fn is_enabled(&self) -> bool {
        self.zero_copy && self.transfer_supported
    }

    #[instrument(skip_all, level = "trace")]
    pub fn plan(&self, payload: &Payload) -> Option<TransferList> {
        if !self.is_enabled() {
            self.metrics.plan_skipped();
            return None;
        }
        match plan_transfer(payload, self.zero_copy, self.transfer_supported) {
            Some(list) => {
                debug!(
                    buffers = list.len(),
                    bytes = list.total_bytes(),
                    "planned zero-copy transfer"
                );
                self.metrics.plan_listed(list.len() as u64, list.total_bytes() as u64);
                Some(list)
            }
            None => {
                self.metrics.plan_empty();
                None
            }
        }
    }

    /// Pair a payload with its transfer list for a message send
    pub fn prepare(&self, payload: Payload) -> OutboundMessage {
        let transfer = self.plan(&payload);
        OutboundMessage { payload, transfer }
    }

    pub fn metrics(&self) -> &TransferMetrics {
        &self.metrics
    }
}

/// A job ready to be posted to a worker: the payload moves with the list of
/// buffers whose ownership goes along with it
#[derive(Debug)]
pub struct OutboundMessage {
    pub payload: Payload,
    pub transfer: Option<TransferList>,
}

impl OutboundMessage {
    /// Split into the payload and the buffers handed over with it
    pub fn into_parts(self) -> (Payload, Vec<Buffer>) {
        let buffers = self.transfer.map(TransferList::into_buffers).unwrap_or_default();
        (self.payload, buffers)
    }
}
