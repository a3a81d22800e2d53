//! Errors surfaced by a lint run.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure reported by a linter.
    #[error("{linter}: {source}")]
    Linter {
        /// Name of the failing linter.
        linter: &'static str,
        /// Underlying linter error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LintError {
    /// Wraps a linter-specific error.
    pub fn linter(
        linter: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Linter {
            linter,
            source: source.into(),
        }
    }
}
