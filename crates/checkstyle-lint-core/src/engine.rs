//! Lint engine that drives a linter over a working set.

use crate::config::{Config, ConfigError};
use crate::error::LintError;
use crate::linter::{Claim, LintContext, Linter, LinterBox};
use crate::options::{self, OptionTable};
use crate::settings::LinterSettings;
use crate::types::LintResult;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builder for configuring a [`LintEngine`].
#[derive(Default)]
pub struct LintEngineBuilder {
    root: Option<PathBuf>,
    linter: Option<LinterBox>,
    config: Option<Config>,
}

impl LintEngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root (default: current directory).
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the linter to drive.
    #[must_use]
    pub fn linter<L: Linter + 'static>(mut self, linter: L) -> Self {
        self.linter = Some(Box::new(linter));
        self
    }

    /// Sets the configuration applied at build time.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine and applies the configuration, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if no linter was set, the current directory cannot
    /// be resolved, or a configuration value is rejected.
    pub fn build(self) -> Result<LintEngine, LintError> {
        let linter = self.linter.ok_or_else(|| ConfigError::Missing {
            key: "linter".to_string(),
        })?;

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut engine = LintEngine {
            ctx: LintContext::new(root),
            linter,
            settings: LinterSettings::new(),
        };
        if let Some(config) = self.config {
            engine.apply_config(&config)?;
        }
        Ok(engine)
    }
}

/// Drives one linter over a set of paths.
///
/// Use [`LintEngine::builder()`] to construct an instance.
pub struct LintEngine {
    ctx: LintContext,
    linter: LinterBox,
    settings: LinterSettings,
}

impl LintEngine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> LintEngineBuilder {
        LintEngineBuilder::new()
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.ctx.root()
    }

    /// Returns every option accepted for this linter, host options included.
    #[must_use]
    pub fn options(&self) -> OptionTable {
        options::merge(self.linter.configuration_options(), LinterSettings::options())
    }

    /// Sets one configuration value.
    ///
    /// The linter sees the key first; keys it forwards go to the host
    /// settings, which reject anything they do not own.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or invalid values.
    pub fn configure(&mut self, key: &str, value: &toml::Value) -> Result<(), ConfigError> {
        match self.linter.set_configuration_value(key, value)? {
            Claim::Handled => {
                debug!("{} claimed {}", self.linter.name(), key);
                Ok(())
            }
            Claim::Forward => self.settings.set(key, value),
        }
    }

    /// Applies the section of `config` named after the linter.
    ///
    /// # Errors
    ///
    /// Returns the first rejected key.
    pub fn apply_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        let Some(section) = config.section(self.linter.configuration_name()) else {
            debug!(
                "No [linters.{}] section in config",
                self.linter.configuration_name()
            );
            return Ok(());
        };
        for (key, value) in section {
            self.configure(key, value)?;
        }
        Ok(())
    }

    /// Lints the given paths and returns the collected issues.
    ///
    /// Paths are relative to the root; duplicates are linted once. Issues
    /// are grouped by path in input order; within a path the linter's order
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the linter.
    pub async fn run(&mut self, paths: &[String]) -> Result<LintResult, LintError> {
        let mut seen = HashSet::new();
        let paths: Vec<String> = paths
            .iter()
            .filter(|p| self.settings.should_lint(p) && seen.insert(p.as_str()))
            .cloned()
            .collect();

        let mut result = LintResult::new();
        if paths.is_empty() {
            info!("No paths to lint");
            return Ok(result);
        }

        info!(
            "Linting {} path(s) with {} at {:?}",
            paths.len(),
            self.linter.name(),
            self.ctx.root()
        );

        self.linter.will_lint_paths(&self.ctx, &paths).await?;

        for path in &paths {
            let issues = self.linter.lint_path(&self.ctx, path)?;
            let issues = self.settings.apply_severity_overrides(issues);
            result.issues.extend(issues);
            result.files_checked += 1;
        }

        info!(
            "Lint complete: {} issue(s) in {} file(s)",
            result.issues.len(),
            result.files_checked
        );

        Ok(result)
    }
}
