//! Checkstyle severity names.

use checkstyle_lint_core::Severity;

/// Checkstyle severity attribute values and the severity each maps to.
const SEVERITY_MAP: &[(&str, Severity)] = &[
    ("error", Severity::Error),
    ("warning", Severity::Warning),
    ("info", Severity::Advice),
];

/// Maps a checkstyle `severity` attribute to a lint severity.
///
/// Matching is exact and case-sensitive. Anything not in the table,
/// including the empty string, is treated as an error.
#[must_use]
pub fn map_severity(raw: &str) -> Severity {
    SEVERITY_MAP
        .iter()
        .find(|(name, _)| *name == raw)
        .map_or(Severity::Error, |(_, severity)| *severity)
}
