//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config_resolver::PROJECT_CONFIG_NAMES;

const DEFAULT_CONFIG: &str = r#"# checkstyle-lint configuration

[linters.checkstyle]
# Script run once per file as `<script> <path>` from the project root.
# It must exit 0 and print nothing or checkstyle XML on stdout.
"checkstyle.script" = "./tools/run-checkstyle"

# Only lint matching paths (glob patterns, relative to the project root)
# include = ["src/**/*.java"]

# Never lint matching paths
exclude = [
    "**/target/**",
    "**/vendor/**",
]

# Override severity by rule name (checkstyle `source`) or by code.
# Values: error, warning, advice, disabled
# [linters.checkstyle.severity]
# "com.puppycrawl.tools.checkstyle.checks.imports.UnusedImportsCheck" = "warning"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(PROJECT_CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Point checkstyle.script at your analysis script");
    println!("  2. Run: checkstyle-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkstyle_lint::{CheckstyleLinter, Config, LintEngine};

    #[test]
    fn default_config_is_accepted_by_engine() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let engine = LintEngine::builder()
            .root(".")
            .linter(CheckstyleLinter::new())
            .config(config)
            .build();
        assert!(engine.is_ok());
    }
}
