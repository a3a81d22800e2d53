//! Configuration option tables.
//!
//! Every linter advertises the keys it accepts as an [`OptionTable`]. The
//! host merges a linter's table with its own base table so callers see a
//! single list of valid keys.

use std::collections::BTreeMap;

use crate::config::ConfigError;

/// Value shape accepted by a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// A single string.
    String,
    /// A list of strings.
    StringList,
    /// A map from string keys to string values.
    StringMap,
}

impl OptionType {
    /// Returns the type name shown to users.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringList => "list<string>",
            Self::StringMap => "map<string, string>",
        }
    }

    /// Checks whether `value` has this shape.
    #[must_use]
    pub fn accepts(self, value: &toml::Value) -> bool {
        match self {
            Self::String => value.is_str(),
            Self::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(toml::Value::is_str)),
            Self::StringMap => value
                .as_table()
                .is_some_and(|table| table.values().all(toml::Value::is_str)),
        }
    }

    /// Returns an error unless `value` has this shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] on a shape mismatch.
    pub fn check(self, key: &str, value: &toml::Value) -> Result<(), ConfigError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                key: key.to_string(),
                expected: self.as_str(),
            })
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single configuration option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    /// Expected value shape.
    pub kind: OptionType,
    /// One-line help text.
    pub help: &'static str,
}

impl ConfigOption {
    /// Creates a new option.
    #[must_use]
    pub const fn new(kind: OptionType, help: &'static str) -> Self {
        Self { kind, help }
    }
}

/// Option key to option description, sorted by key.
pub type OptionTable = BTreeMap<&'static str, ConfigOption>;

/// Merges a linter's options over the host's base options.
///
/// Entries from `linter` win when both tables define the same key.
#[must_use]
pub fn merge(linter: OptionTable, base: OptionTable) -> OptionTable {
    let mut merged = base;
    merged.extend(linter);
    merged
}
