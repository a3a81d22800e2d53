//! # checkstyle-lint
//!
//! Lint adapter for tools that speak checkstyle XML.
//!
//! The adapter runs a configured shell command once per file
//! (`<script> <path>`, from the project root, at most four at a time) and
//! turns every `<file><error/></file>` entry of the script's output into
//! a [`LintIssue`].
//!
//! This crate re-exports the host framework from `checkstyle-lint-core`.
//!
//! ## Example
//!
//! ```ignore
//! use checkstyle_lint::{CheckstyleLinter, LintEngine};
//!
//! let mut engine = LintEngine::builder()
//!     .root("./project")
//!     .linter(CheckstyleLinter::new().with_script("tools/run-checkstyle"))
//!     .build()?;
//!
//! let result = engine.run(&["src/Main.java".to_string()]).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod linter;
mod runner;
mod severity;
mod translate;

// Re-export the host framework
pub use checkstyle_lint_core::*;

pub use error::CheckstyleError;
pub use linter::{CheckstyleLinter, SCRIPT_KEY};
pub use runner::{BatchRunner, RawOutput, ScriptConfig, DEFAULT_CONCURRENCY_LIMIT};
pub use severity::map_severity;
pub use translate::translate;

/// Linter identifier, also used as the code of every issue.
pub const LINTER_NAME: &str = "Checkstyle";

/// Key under which the linter's configuration is namespaced.
pub const CONFIGURATION_NAME: &str = "checkstyle";
