//! The linter capability implemented by every lint adapter.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;
use crate::error::LintError;
use crate::options::OptionTable;
use crate::types::LintIssue;

/// Context provided to linters for one run.
#[derive(Debug, Clone)]
pub struct LintContext {
    /// Project root; paths handed to the linter are relative to it.
    pub root: PathBuf,
}

impl LintContext {
    /// Creates a new context rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Whether a linter handled a configuration key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The linter stored the value.
    Handled,
    /// The key belongs to the host; forward it to the host's setter.
    Forward,
}

/// A lint adapter composed into the host's linter registry.
///
/// The host drives a run in two phases: [`Linter::will_lint_paths`] once for
/// the whole working set, then [`Linter::lint_path`] once per path.
///
/// # Example
///
/// ```ignore
/// use checkstyle_lint_core::{Claim, ConfigError, LintContext, LintError, LintIssue, Linter};
///
/// struct Noop;
///
/// #[async_trait::async_trait]
/// impl Linter for Noop {
///     fn name(&self) -> &'static str { "Noop" }
///     fn configuration_name(&self) -> &'static str { "noop" }
///
///     fn set_configuration_value(&mut self, _: &str, _: &toml::Value) -> Result<Claim, ConfigError> {
///         Ok(Claim::Forward)
///     }
///
///     async fn will_lint_paths(&mut self, _: &LintContext, _: &[String]) -> Result<(), LintError> {
///         Ok(())
///     }
///
///     fn lint_path(&self, _: &LintContext, _: &str) -> Result<Vec<LintIssue>, LintError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait Linter: Send + Sync {
    /// Returns the stable linter identifier used in reports and issue codes.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this linter does.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the key under which this linter's configuration is namespaced.
    fn configuration_name(&self) -> &'static str;

    /// Returns the options this linter accepts, excluding host options.
    fn configuration_options(&self) -> OptionTable {
        OptionTable::new()
    }

    /// Stores a configuration value, or returns [`Claim::Forward`] for keys
    /// the linter does not own.
    ///
    /// # Errors
    ///
    /// Returns an error if a claimed key has an invalid value.
    fn set_configuration_value(
        &mut self,
        key: &str,
        value: &toml::Value,
    ) -> Result<Claim, ConfigError>;

    /// Prepares the whole working set before any path is linted.
    ///
    /// # Errors
    ///
    /// Returns an error if preparation fails; the run is aborted.
    async fn will_lint_paths(&mut self, ctx: &LintContext, paths: &[String])
        -> Result<(), LintError>;

    /// Lints a single path and returns its issues in report order.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be linted; the run is aborted.
    fn lint_path(&self, ctx: &LintContext, path: &str) -> Result<Vec<LintIssue>, LintError>;
}

/// Type alias for boxed Linter trait objects.
pub type LinterBox = Box<dyn Linter>;
