//! # Host Capabilities
//!
//! A small description of what the host process can do, resolved once at
//! startup and handed to the components that care. Nothing in this crate
//! re-probes the host per call.

use crate::config::UtilConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the running host supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
    /// Native crypto backends may be used
    pub native_crypto_available: bool,
    /// Buffers can be moved to another thread as part of a message send
    pub transfer_supported: bool,
    /// Running as a server-side process rather than an embedded/browser host
    pub is_server_host: bool,
}

impl HostCapabilities {
    /// Probe the current host, honouring the `use_native` policy flag
    pub fn detect(config: &UtilConfig) -> Self {
        let is_server_host = !cfg!(target_family = "wasm");
        // wasm32-unknown-unknown has no threads to hand buffers to
        let transfer_supported = !cfg!(all(target_family = "wasm", not(target_feature = "atomics")));

        let caps = Self {
            native_crypto_available: config.use_native && is_server_host,
            transfer_supported,
            is_server_host,
        };
        debug!(?caps, "resolved host capabilities");
        caps
    }

    /// Capabilities of a host that supports nothing optional
    pub fn minimal() -> Self {
        Self {
            native_crypto_available: false,
            transfer_supported: false,
            is_server_host: false,
        }
    }

    /// Native crypto handle, or `None` when unavailable or disabled by policy
    pub fn native_crypto(&self) -> Option<NativeCrypto> {
        self.native_crypto_available.then_some(NativeCrypto { _private: () })
    }
}

/// Token proving that native crypto backends may be used on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCrypto {
    _private: (),
}
