//! Configuration file types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration file.
///
/// ```toml
/// [linters.checkstyle]
/// "checkstyle.script" = "tools/run-checkstyle"
/// include = ["src/**/*.java"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-linter option sections, keyed by the linter's configuration name.
    #[serde(default)]
    pub linters: BTreeMap<String, LinterSection>,
}

/// Raw option values for one linter, in key order.
pub type LinterSection = BTreeMap<String, toml::Value>;

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the section for a linter's configuration name.
    #[must_use]
    pub fn section(&self, configuration_name: &str) -> Option<&LinterSection> {
        self.linters.get(configuration_name)
    }

    /// Sets a single option value, creating the section if needed.
    pub fn set(
        &mut self,
        configuration_name: &str,
        key: impl Into<String>,
        value: impl Into<toml::Value>,
    ) {
        self.linters
            .entry(configuration_name.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Key not recognized by the linter or the host.
    #[error("Unknown configuration key: {key}")]
    UnknownKey {
        /// The offending key.
        key: String,
    },

    /// Value has the wrong shape for its key.
    #[error("Invalid value for {key}: expected {expected}")]
    InvalidValue {
        /// The offending key.
        key: String,
        /// Expected value type.
        expected: &'static str,
    },

    /// A required option was never set.
    #[error("Missing required configuration key: {key}")]
    Missing {
        /// The missing key.
        key: String,
    },
}
