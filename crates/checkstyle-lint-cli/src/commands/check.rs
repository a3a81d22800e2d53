//! Check command implementation.

use anyhow::{Context, Result};
use checkstyle_lint::{CheckstyleLinter, LintEngine, LintResult, CONFIGURATION_NAME, SCRIPT_KEY};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command; exits with status 1 when any issue is an error.
pub async fn run(
    root: &Path,
    targets: &[PathBuf],
    format: OutputFormat,
    script: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let result = lint(root, targets, script, source).await?;
    super::output::print(&result, format)?;

    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Loads the configuration, applies the `--script` override and lints.
pub async fn lint(
    root: &Path,
    targets: &[PathBuf],
    script: Option<String>,
    source: &ConfigSource,
) -> Result<LintResult> {
    let mut config = source.load()?;
    if let Some(script) = script {
        config.set(CONFIGURATION_NAME, SCRIPT_KEY, script);
    }

    let mut engine = LintEngine::builder()
        .root(root)
        .linter(CheckstyleLinter::new())
        .config(config)
        .build()
        .context("Failed to configure linter")?;

    let paths = discover_paths(engine.root(), targets)?;
    tracing::info!("Linting {} file(s) under {}", paths.len(), engine.root().display());

    engine.run(&paths).await.context("Lint run failed")
}

/// Process exit status for a finished run.
#[must_use]
pub fn exit_code(result: &LintResult) -> i32 {
    i32::from(result.has_errors())
}

/// Expands targets into file paths relative to `root`.
///
/// Directories are walked with `.gitignore` rules applied. With no targets
/// the whole root is walked.
fn discover_paths(root: &Path, targets: &[PathBuf]) -> Result<Vec<String>> {
    let default_target = [PathBuf::from(".")];
    let targets = if targets.is_empty() {
        &default_target[..]
    } else {
        targets
    };

    let mut paths = Vec::new();
    for target in targets {
        let full = if target.is_absolute() {
            target.clone()
        } else {
            root.join(target)
        };

        if full.is_dir() {
            for entry in WalkBuilder::new(&full).build() {
                let entry = entry.with_context(|| format!("Failed to walk {}", full.display()))?;
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    paths.push(relative_to(root, entry.path()));
                }
            }
        } else if full.is_file() {
            paths.push(relative_to(root, &full));
        } else {
            anyhow::bail!("No such file or directory: {}", full.display());
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}

fn relative_to(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative.strip_prefix(".").unwrap_or(relative);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
