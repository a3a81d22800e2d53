//! Core types for lint issues and results.

use serde::{Deserialize, Serialize};

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory message, does not fail lint.
    Advice,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Returns the lowercase name used in config files and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advice => "advice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single lint finding handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Linter identifier (e.g., "Checkstyle").
    pub code: String,
    /// Rule name reported by the underlying tool.
    pub name: String,
    /// Line number, 0 when unknown.
    pub line: usize,
    /// Column number, 0 when unknown.
    #[serde(rename = "char")]
    pub column: usize,
    /// Severity of this issue.
    pub severity: Severity,
    /// Human-readable message.
    pub description: String,
    /// Path of the linted file, as submitted to the linter.
    pub path: String,
}

impl std::fmt::Display for LintIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.path, self.line, self.column, self.severity, self.code, self.description
        )?;
        if !self.name.is_empty() {
            write!(f, " ({})", self.name)?;
        }
        Ok(())
    }
}

/// Result of a lint run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All issues found, grouped by path in the order paths were linted.
    pub issues: Vec<LintIssue>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_issues_at(Severity::Error)
    }

    /// Checks if any issues meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_issues_at(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= severity)
    }

    /// Returns issues reported for a single path.
    #[must_use]
    pub fn for_path(&self, path: &str) -> Vec<&LintIssue> {
        self.issues.iter().filter(|i| i.path == path).collect()
    }

    /// Counts issues by severity as `(errors, warnings, advice)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.issues
            .iter()
            .fold((0, 0, 0), |(e, w, a), i| match i.severity {
                Severity::Error => (e + 1, w, a),
                Severity::Warning => (e, w + 1, a),
                Severity::Advice => (e, w, a + 1),
            })
    }
}
