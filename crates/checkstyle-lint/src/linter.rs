//! The checkstyle linter.

use async_trait::async_trait;
use checkstyle_lint_core::{
    Claim, ConfigError, ConfigOption, LintContext, LintError, LintIssue, Linter, OptionTable,
    OptionType,
};
use tracing::debug;

use crate::error::CheckstyleError;
use crate::runner::{BatchRunner, RawOutput, ScriptConfig};
use crate::translate::translate;
use crate::{CONFIGURATION_NAME, LINTER_NAME};

/// Configuration key holding the script to execute.
pub const SCRIPT_KEY: &str = "checkstyle.script";

/// Runs an external script per file and reads its checkstyle output.
#[derive(Debug, Default)]
pub struct CheckstyleLinter {
    script: Option<String>,
    concurrency_limit: Option<usize>,
    outputs: RawOutput,
}

impl CheckstyleLinter {
    /// Creates a linter with no script configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the script directly, as `checkstyle.script` would.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Overrides the number of concurrent script invocations.
    #[must_use]
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = Some(limit);
        self
    }

    /// Returns the configured script, if any.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Builds the invocation config for a run rooted at `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckstyleError::MissingScript`] if no script is set.
    pub fn script_config(&self, ctx: &LintContext) -> Result<ScriptConfig, CheckstyleError> {
        let script = self.script.clone().ok_or(CheckstyleError::MissingScript)?;
        let config = ScriptConfig::new(script, ctx.root());
        Ok(match self.concurrency_limit {
            Some(limit) => config.with_concurrency_limit(limit),
            None => config,
        })
    }
}

impl From<CheckstyleError> for LintError {
    fn from(e: CheckstyleError) -> Self {
        LintError::linter(LINTER_NAME, e)
    }
}

#[async_trait]
impl Linter for CheckstyleLinter {
    fn name(&self) -> &'static str {
        LINTER_NAME
    }

    fn description(&self) -> &'static str {
        "Run an external script, then parse its output for checkstyle content"
    }

    fn configuration_name(&self) -> &'static str {
        CONFIGURATION_NAME
    }

    fn configuration_options(&self) -> OptionTable {
        OptionTable::from([(
            SCRIPT_KEY,
            ConfigOption::new(OptionType::String, "Script to execute."),
        )])
    }

    fn set_configuration_value(
        &mut self,
        key: &str,
        value: &toml::Value,
    ) -> Result<Claim, ConfigError> {
        match key {
            SCRIPT_KEY => {
                let script = value.as_str().ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    expected: OptionType::String.as_str(),
                })?;
                self.script = Some(script.to_string());
                Ok(Claim::Handled)
            }
            _ => Ok(Claim::Forward),
        }
    }

    async fn will_lint_paths(
        &mut self,
        ctx: &LintContext,
        paths: &[String],
    ) -> Result<(), LintError> {
        let runner = BatchRunner::new(self.script_config(ctx)?);
        self.outputs = runner.run(paths).await?;
        Ok(())
    }

    fn lint_path(&self, _ctx: &LintContext, path: &str) -> Result<Vec<LintIssue>, LintError> {
        let Some(output) = self.outputs.get(path) else {
            debug!("No captured output for {}", path);
            return Ok(Vec::new());
        };
        Ok(translate(path, output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_hooks() {
        let linter = CheckstyleLinter::new();
        assert_eq!(linter.name(), "Checkstyle");
        assert_eq!(linter.configuration_name(), "checkstyle");
    }

    #[test]
    fn advertises_script_option() {
        let options = CheckstyleLinter::new().configuration_options();
        assert_eq!(options.len(), 1);
        let script = &options[SCRIPT_KEY];
        assert_eq!(script.kind, OptionType::String);
        assert_eq!(script.help, "Script to execute.");
    }

    #[test]
    fn claims_only_the_script_key() {
        let mut linter = CheckstyleLinter::new();
        let claim = linter
            .set_configuration_value(SCRIPT_KEY, &toml::Value::from("bin/lint"))
            .unwrap();
        assert_eq!(claim, Claim::Handled);
        assert_eq!(linter.script(), Some("bin/lint"));

        let claim = linter
            .set_configuration_value("severity", &toml::Value::from("x"))
            .unwrap();
        assert_eq!(claim, Claim::Forward);
    }

    #[test]
    fn rejects_non_string_script() {
        let mut linter = CheckstyleLinter::new();
        let err = linter
            .set_configuration_value(SCRIPT_KEY, &toml::Value::from(4))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(linter.script().is_none());
    }

    #[test]
    fn script_config_requires_script() {
        let ctx = LintContext::new("/project");
        let err = CheckstyleLinter::new().script_config(&ctx).unwrap_err();
        assert!(matches!(err, CheckstyleError::MissingScript));
    }

    #[test]
    fn script_config_uses_root_as_working_directory() {
        let ctx = LintContext::new("/project");
        let config = CheckstyleLinter::new()
            .with_script("tools/lint --strict")
            .with_concurrency_limit(2)
            .script_config(&ctx)
            .unwrap();
        assert_eq!(config.working_directory(), std::path::Path::new("/project"));
        assert_eq!(config.script(), "tools/lint --strict");
        assert_eq!(config.concurrency_limit(), 2);
    }

    #[tokio::test]
    async fn will_lint_paths_without_script_fails() {
        let mut linter = CheckstyleLinter::new();
        let ctx = LintContext::new("/project");
        let err = linter
            .will_lint_paths(&ctx, &["a.js".to_string()])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("checkstyle.script"));
    }

    #[test]
    fn unknown_path_has_no_issues() {
        let linter = CheckstyleLinter::new();
        let ctx = LintContext::new("/project");
        assert!(linter.lint_path(&ctx, "never-run.js").unwrap().is_empty());
    }
}
