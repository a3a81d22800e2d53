//! # checkstyle-lint-core
//!
//! Host framework for running lint adapters.
//!
//! This crate provides the pieces a lint adapter plugs into:
//!
//! - [`Linter`] capability implemented by each adapter
//! - [`LintEngine`] for configuring a linter and driving a run
//! - [`LintIssue`] for representing lint findings
//! - [`OptionTable`] and [`LinterSettings`] for the configuration surface
//!
//! ## Example
//!
//! ```ignore
//! use checkstyle_lint_core::{Config, LintEngine};
//!
//! let mut engine = LintEngine::builder()
//!     .root("./project")
//!     .linter(MyLinter::new())
//!     .config(Config::from_file("checkstyle-lint.toml".as_ref())?)
//!     .build()?;
//!
//! let result = engine.run(&paths).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod linter;
mod options;
mod settings;
mod types;

pub use config::{Config, ConfigError, LinterSection};
pub use engine::{LintEngine, LintEngineBuilder};
pub use error::LintError;
pub use linter::{Claim, LintContext, Linter, LinterBox};
pub use options::{merge as merge_options, ConfigOption, OptionTable, OptionType};
pub use settings::LinterSettings;
pub use types::{LintIssue, LintResult, Severity};
