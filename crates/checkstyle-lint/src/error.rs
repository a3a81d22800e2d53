//! Adapter errors.

use thiserror::Error;

/// Errors raised while running the script or reading its output.
#[derive(Debug, Error)]
pub enum CheckstyleError {
    /// `checkstyle.script` was never configured.
    #[error("No script configured; set checkstyle.script")]
    MissingScript,

    /// The script could not be started.
    #[error("Failed to run {script} on {path}: {source}")]
    Spawn {
        /// Script that failed to start.
        script: String,
        /// Path being linted.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The script exited with a nonzero status.
    #[error("{script} failed on {path} ({}){}", exit_label(.code.as_ref()), stderr_suffix(.stderr))]
    ProcessFailure {
        /// Script that failed.
        script: String,
        /// Path being linted.
        path: String,
        /// Exit code, `None` when killed by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The script's output is not well-formed XML.
    #[error("Malformed checkstyle output for {path}: {message}")]
    MalformedOutput {
        /// Path being linted.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A worker task died before reporting.
    #[error("Worker failed: {message}")]
    Worker {
        /// Description of the failure.
        message: String,
    },
}

fn exit_label(code: Option<&i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
