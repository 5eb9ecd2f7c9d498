//! Debug dumps gated on the configured `debug` flag.
//!
//! Callers hold a [`DebugLog`] built from their [`UtilConfig`] instead of
//! consulting a global flag. Output goes through `tracing`, so the subscriber
//! decides where it ends up. Hex conversion only happens when the flag is
//! set.

use crate::config::UtilConfig;
use crate::encoding::hex::{bytes_to_hex, str_to_hex};
use std::fmt::Display;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn from_config(config: &UtilConfig) -> Self {
        Self::new(config.debug)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn print_debug(&self, message: &str) {
        if self.enabled {
            debug!(target: "pgp_wire_util::debug", "{message}");
        }
    }

    /// Log `message` followed by the hex of `bytes`
    pub fn print_debug_hexarray_dump(&self, message: &str, bytes: &[u8]) {
        if self.enabled {
            debug!(target: "pgp_wire_util::debug", hex = %bytes_to_hex(bytes), "{message}");
        }
    }

    /// Log `message` followed by the hex of a binary string
    pub fn print_debug_hexstr_dump(&self, message: &str, binary: &str) {
        if self.enabled {
            debug!(target: "pgp_wire_util::debug", hex = %str_to_hex(binary), "{message}");
        }
    }

    pub fn print_debug_error(&self, err: &dyn Display) {
        if self.enabled {
            error!(target: "pgp_wire_util::debug", error = %err, "debug error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UtilError;

    #[test]
    fn test_follows_config_flag() {
        assert!(!DebugLog::from_config(&UtilConfig::default()).is_enabled());
        let config = UtilConfig::default_with_overrides(|c| c.debug = true);
        assert!(DebugLog::from_config(&config).is_enabled());
    }

    #[test]
    fn test_disabled_logger_is_silent_noop() {
        let log = DebugLog::default();
        log.print_debug("nothing");
        log.print_debug_hexarray_dump("key", &[1, 2, 3]);
        log.print_debug_hexstr_dump("str", "\u{1}\u{2}");
        log.print_debug_error(&UtilError::ConfigError("x".into()));
    }

    #[test]
    fn test_enabled_logger_without_subscriber() {
        let log = DebugLog::new(true);
        log.print_debug("hello");
        log.print_debug_hexarray_dump("key", &[0xAB]);
        log.print_debug_error(&"plain display");
    }
}
