//! Batch runner: one script invocation per path, bounded concurrency.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info};

use crate::error::CheckstyleError;

/// Maximum number of script invocations running at once.
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 4;

/// Shell used to run the configured command line.
const SHELL: &str = "sh";

/// How to invoke the external script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    script: String,
    working_directory: PathBuf,
    concurrency_limit: usize,
}

impl ScriptConfig {
    /// Creates a config running `script` from `working_directory`.
    ///
    /// `script` is a shell command line and may carry its own arguments,
    /// e.g. `vendor/bin/phpcs --report=checkstyle`. Relative paths in it
    /// resolve against the working directory.
    #[must_use]
    pub fn new(script: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            working_directory: working_directory.into(),
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
        }
    }

    /// Overrides the concurrency limit; values below 1 are raised to 1.
    #[must_use]
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit.max(1);
        self
    }

    /// Returns the command line that will be executed.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Returns the directory scripts run in.
    #[must_use]
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Returns the maximum number of concurrent invocations.
    #[must_use]
    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }
}

/// Captured standard output per path for one batch.
#[derive(Debug, Default, Clone)]
pub struct RawOutput {
    outputs: HashMap<String, String>,
}

impl RawOutput {
    /// Returns the output captured for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.outputs.get(path).map(String::as_str)
    }

    /// Returns true if `path` has an entry.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.outputs.contains_key(path)
    }

    /// Returns the number of paths with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Returns true if no path has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    fn record(
        &mut self,
        joined: Result<Result<(String, String), CheckstyleError>, JoinError>,
    ) -> Result<(), CheckstyleError> {
        let (path, output) = joined.map_err(|e| CheckstyleError::Worker {
            message: e.to_string(),
        })??;
        self.outputs.insert(path, output);
        Ok(())
    }
}

/// Runs the script over a batch of paths.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: ScriptConfig,
}

impl BatchRunner {
    /// Creates a runner for `config`.
    #[must_use]
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }

    /// Runs `<script> <path>` for every distinct path and captures stdout.
    ///
    /// Invocations start in submission order, at most
    /// [`ScriptConfig::concurrency_limit`] at a time. The call returns once
    /// every invocation has finished.
    ///
    /// # Errors
    ///
    /// Returns the first spawn failure or nonzero exit. Invocations still in
    /// flight are aborted and their processes killed.
    pub async fn run(&self, paths: &[String]) -> Result<RawOutput, CheckstyleError> {
        let slots = Arc::new(Semaphore::new(self.config.concurrency_limit));
        let mut tasks = JoinSet::new();
        let mut outputs = RawOutput::default();
        let mut seen = HashSet::new();

        info!(
            "Running {} on {} path(s), {} at a time",
            self.config.script,
            paths.len(),
            self.config.concurrency_limit
        );

        for path in paths {
            if !seen.insert(path.as_str()) {
                debug!("Skipping duplicate path: {}", path);
                continue;
            }

            // Reap finished invocations while waiting so a failure aborts early.
            let permit = loop {
                tokio::select! {
                    permit = Arc::clone(&slots).acquire_owned() => {
                        break permit.map_err(|e| CheckstyleError::Worker {
                            message: e.to_string(),
                        })?;
                    }
                    Some(joined) = tasks.join_next() => outputs.record(joined)?,
                }
            };

            let invocation = Invocation {
                script: self.config.script.clone(),
                working_directory: self.config.working_directory.clone(),
                path: path.clone(),
            };
            tasks.spawn(async move {
                let result = invocation.run().await;
                drop(permit);
                result
            });
        }

        while let Some(joined) = tasks.join_next().await {
            outputs.record(joined)?;
        }

        info!("Captured output for {} path(s)", outputs.len());
        Ok(outputs)
    }
}

/// A single `<script> <path>` call.
struct Invocation {
    script: String,
    working_directory: PathBuf,
    path: String,
}

impl Invocation {
    async fn run(self) -> Result<(String, String), CheckstyleError> {
        debug!("Starting: {} {}", self.script, self.path);

        // The path travels as `$1`, never spliced into the command line.
        let output = Command::new(SHELL)
            .arg("-c")
            .arg(format!("{} \"$1\"", self.script))
            .arg(SHELL)
            .arg(&self.path)
            .current_dir(&self.working_directory)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CheckstyleError::Spawn {
                script: self.script.clone(),
                path: self.path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckstyleError::ProcessFailure {
                script: self.script,
                path: self.path,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!("Finished: {} ({} bytes)", self.path, output.stdout.len());
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok((self.path, stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_is_kept_verbatim() {
        let config = ScriptConfig::new("vendor/bin/phpcs --report=checkstyle", "/project");
        assert_eq!(config.script(), "vendor/bin/phpcs --report=checkstyle");
        assert_eq!(config.working_directory(), Path::new("/project"));
    }

    #[test]
    fn concurrency_defaults_to_four_and_floors_at_one() {
        let config = ScriptConfig::new("lint", "/project");
        assert_eq!(config.concurrency_limit(), DEFAULT_CONCURRENCY_LIMIT);
        assert_eq!(config.with_concurrency_limit(0).concurrency_limit(), 1);
    }

    #[tokio::test]
    async fn empty_batch_spawns_nothing() {
        let runner = BatchRunner::new(ScriptConfig::new("/nonexistent/script", "/"));
        let outputs = runner.run(&[]).await.unwrap();
        assert!(outputs.is_empty());
    }

    #[tokio::test]
    async fn missing_working_directory_is_a_spawn_error() {
        let runner = BatchRunner::new(ScriptConfig::new("true", "/nonexistent/dir"));
        let err = runner.run(&["a.js".to_string()]).await.unwrap_err();
        assert!(matches!(err, CheckstyleError::Spawn { ref path, .. } if path == "a.js"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_script_is_a_process_failure() {
        let runner = BatchRunner::new(ScriptConfig::new("/nonexistent/script", "/"));
        let err = runner.run(&["a.js".to_string()]).await.unwrap_err();
        assert!(matches!(
            err,
            CheckstyleError::ProcessFailure { code: Some(127), ref path, .. } if path == "a.js"
        ));
    }
}
