//! Host-owned linter settings.
//!
//! These are the options every linter gets for free: path filtering and
//! severity overrides. Keys a linter does not claim end up here.

use std::collections::BTreeMap;

use glob::Pattern;
use tracing::debug;

use crate::config::ConfigError;
use crate::options::{ConfigOption, OptionTable, OptionType};
use crate::types::{LintIssue, Severity};

/// Severity override value that suppresses an issue entirely.
const DISABLED: &str = "disabled";

/// Base settings applied by the host around every linter.
#[derive(Debug, Clone, Default)]
pub struct LinterSettings {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    /// Issue name or code to replacement severity; `None` drops the issue.
    severity: BTreeMap<String, Option<Severity>>,
}

impl LinterSettings {
    /// Creates empty settings: every path linted, no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the options owned by the host.
    #[must_use]
    pub fn options() -> OptionTable {
        OptionTable::from([
            (
                "include",
                ConfigOption::new(
                    OptionType::StringList,
                    "Glob patterns; only matching paths are linted.",
                ),
            ),
            (
                "exclude",
                ConfigOption::new(
                    OptionType::StringList,
                    "Glob patterns for paths that are never linted.",
                ),
            ),
            (
                "severity",
                ConfigOption::new(
                    OptionType::StringMap,
                    "Override severity by issue name or code (error, warning, advice, disabled).",
                ),
            ),
        ])
    }

    /// Stores a host-owned option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for keys the host does not own,
    /// and [`ConfigError::InvalidValue`] for malformed values.
    pub fn set(&mut self, key: &str, value: &toml::Value) -> Result<(), ConfigError> {
        match key {
            "include" => {
                OptionType::StringList.check(key, value)?;
                self.include = compile_patterns(key, value)?;
            }
            "exclude" => {
                OptionType::StringList.check(key, value)?;
                self.exclude = compile_patterns(key, value)?;
            }
            "severity" => {
                OptionType::StringMap.check(key, value)?;
                let mut overrides = BTreeMap::new();
                for (name, raw) in value.as_table().into_iter().flatten() {
                    let raw = raw.as_str().unwrap_or_default();
                    overrides.insert(name.clone(), parse_override(key, raw)?);
                }
                self.severity = overrides;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Checks whether a path passes the include and exclude filters.
    #[must_use]
    pub fn should_lint(&self, path: &str) -> bool {
        if !self.include.is_empty() && !self.include.iter().any(|p| p.matches(path)) {
            debug!("Not included: {}", path);
            return false;
        }
        if self.exclude.iter().any(|p| p.matches(path)) {
            debug!("Excluding: {}", path);
            return false;
        }
        true
    }

    /// Applies severity overrides, dropping disabled issues.
    #[must_use]
    pub fn apply_severity_overrides(&self, issues: Vec<LintIssue>) -> Vec<LintIssue> {
        if self.severity.is_empty() {
            return issues;
        }
        issues
            .into_iter()
            .filter_map(|mut issue| {
                let target = self
                    .severity
                    .get(&issue.name)
                    .or_else(|| self.severity.get(&issue.code));
                match target {
                    None => Some(issue),
                    Some(None) => None,
                    Some(Some(severity)) => {
                        issue.severity = *severity;
                        Some(issue)
                    }
                }
            })
            .collect()
    }
}

fn compile_patterns(key: &str, value: &toml::Value) -> Result<Vec<Pattern>, ConfigError> {
    value
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(toml::Value::as_str)
        .map(|raw| {
            Pattern::new(raw).map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                expected: "glob pattern",
            })
        })
        .collect()
}

fn parse_override(key: &str, raw: &str) -> Result<Option<Severity>, ConfigError> {
    match raw {
        "error" => Ok(Some(Severity::Error)),
        "warning" => Ok(Some(Severity::Warning)),
        "advice" => Ok(Some(Severity::Advice)),
        DISABLED => Ok(None),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            expected: "error, warning, advice or disabled",
        }),
    }
}
