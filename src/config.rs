//! # Configuration Management
//!
//! Process-wide settings for the codec layer, passed explicitly to the calls
//! that need them instead of living in mutable global state.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Flags
//! - `zero_copy`: hand payload buffers to workers by move instead of copying
//! - `debug`: enable the [`crate::utils::debug::DebugLog`] output
//! - `use_native`: allow native crypto backends when the host provides them

use crate::error::{Result, UtilError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Whether buffers are transferred to workers without copying by default
pub const ZERO_COPY: bool = false;

/// Whether debug dumps are emitted by default
pub const DEBUG: bool = false;

/// Whether native crypto backends are used by default
pub const USE_NATIVE: bool = true;

/// Top-level configuration for the codec layer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UtilConfig {
    /// Transfer payload buffers to worker threads instead of copying them
    #[serde(default = "default_zero_copy")]
    pub zero_copy: bool,

    /// Emit debug dumps through the injected debug logger
    #[serde(default)]
    pub debug: bool,

    /// Use native crypto backends when available
    #[serde(default = "default_use_native")]
    pub use_native: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_zero_copy() -> bool {
    ZERO_COPY
}

fn default_use_native() -> bool {
    USE_NATIVE
}

impl Default for UtilConfig {
    fn default() -> Self {
        Self {
            zero_copy: ZERO_COPY,
            debug: DEBUG,
            use_native: USE_NATIVE,
            logging: LoggingConfig::default(),
        }
    }
}

impl UtilConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| UtilError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| UtilError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| UtilError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    ///
    /// Unparseable values are rejected rather than ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = env_flag("PGP_UTIL_ZERO_COPY")? {
            config.zero_copy = val;
        }

        if let Some(val) = env_flag("PGP_UTIL_DEBUG")? {
            config.debug = val;
        }

        if let Some(val) = env_flag("PGP_UTIL_USE_NATIVE")? {
            config.use_native = val;
        }

        if let Ok(level) = std::env::var("PGP_UTIL_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                UtilError::ConfigError(format!("Invalid log level in PGP_UTIL_LOG_LEVEL: {level}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| UtilError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| UtilError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // tracing orders levels by verbosity, TRACE compares greatest
        if self.debug && self.logging.log_level < Level::DEBUG {
            errors.push(format!(
                "debug is enabled but log level '{}' hides debug output",
                self.logging.log_level
            ));
        }

        errors.extend(self.logging.validate());

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(UtilError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn env_flag(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(UtilError::ConfigError(format!(
                "Invalid boolean in {name}: '{raw}'"
            ))),
        },
        Err(_) => Ok(None),
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("pgp-wire-util"),
            log_level: Level::INFO,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = UtilConfig::default();
        assert_eq!(config.zero_copy, ZERO_COPY);
        assert_eq!(config.debug, DEBUG);
        assert_eq!(config.use_native, USE_NATIVE);
        assert_eq!(config.logging.log_level, Level::INFO);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_partial_toml_keeps_defaults() {
        let config = UtilConfig::from_toml("zero_copy = true").unwrap();
        assert!(config.zero_copy);
        assert!(config.use_native);
        assert!(!config.debug);
        assert_eq!(config.logging.app_name, "pgp-wire-util");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_example_config_parses_back() {
        let text = UtilConfig::example_config();
        let parsed = UtilConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.zero_copy, ZERO_COPY);
        assert_eq!(parsed.logging.log_level, Level::INFO);
    }

    #[test]
    fn test_debug_hidden_by_log_level() {
        let config = UtilConfig::default_with_overrides(|c| {
            c.debug = true;
            c.logging.log_level = Level::WARN;
        });
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.contains("hides debug output")));
        assert!(config.validate_strict().is_err());
    }
}
