//! Locating and loading the configuration file.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `checkstyle-lint.toml`, then `.checkstyle-lint.toml`, in the project root
//! 3. `config.toml` in `$CHECKSTYLE_LINT_CONFIG_DIR`, else `~/.checkstyle-lint/`
//! 4. built-in defaults (empty configuration)

use anyhow::{Context, Result};
use checkstyle_lint::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["checkstyle-lint.toml", ".checkstyle-lint.toml"];

/// Config file name inside the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global config directory.
const CONFIG_DIR_ENV: &str = "CHECKSTYLE_LINT_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// Found in the project root.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the configuration.
    ///
    /// An explicit path that does not exist is an error; [`ConfigSource::Default`]
    /// yields an empty configuration.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the configuration source for a project root.
#[must_use]
pub fn resolve(root: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(root, explicit, global_config_dir())
}

/// Resolution with the global directory injected, so tests need no env vars.
fn resolve_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Returns the global config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".checkstyle-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "[linters.checkstyle]\n\"checkstyle.script\" = \"bin/lint\"\n";

    #[test]
    fn explicit_wins_even_if_missing() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("checkstyle-lint.toml"), SAMPLE).unwrap();

        let source = resolve_with_global(project.path(), Some(Path::new("/nope.toml")), None);
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/nope.toml")));
        assert!(source.load().is_err());
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("checkstyle-lint.toml"), SAMPLE).unwrap();
        fs::write(project.path().join(".checkstyle-lint.toml"), "").unwrap();

        let source = resolve_with_global(project.path(), None, None);
        assert_eq!(
            source,
            ConfigSource::Project(project.path().join("checkstyle-lint.toml"))
        );
    }

    #[test]
    fn dotfile_found_alone() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".checkstyle-lint.toml"), SAMPLE).unwrap();

        let source = resolve_with_global(project.path(), None, None);
        assert_eq!(
            source,
            ConfigSource::Project(project.path().join(".checkstyle-lint.toml"))
        );
    }

    #[test]
    fn project_config_shadows_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("checkstyle-lint.toml"), SAMPLE).unwrap();
        fs::write(global.path().join("config.toml"), SAMPLE).unwrap();

        let source = resolve_with_global(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(source, ConfigSource::Project(_)));
    }

    #[test]
    fn global_used_when_project_has_none() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), SAMPLE).unwrap();

        let source = resolve_with_global(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(source, ConfigSource::Global(global.path().join("config.toml")));

        let config = source.load().unwrap();
        assert!(config.section("checkstyle").is_some());
    }

    #[test]
    fn nothing_found_loads_defaults() {
        let project = TempDir::new().unwrap();
        let empty_global = TempDir::new().unwrap();

        let source = resolve_with_global(
            project.path(),
            None,
            Some(empty_global.path().to_path_buf()),
        );
        assert_eq!(source, ConfigSource::Default);
        assert!(source.path().is_none());
        assert!(source.load().unwrap().linters.is_empty());
    }
}
