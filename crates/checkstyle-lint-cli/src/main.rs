//! checkstyle-lint CLI tool.
//!
//! Usage:
//! ```bash
//! checkstyle-lint check [OPTIONS] [PATHS]...
//! checkstyle-lint list-options
//! checkstyle-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Run an external script per file and report its checkstyle findings
#[derive(Parser)]
#[command(name = "checkstyle-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files with the configured script
    Check {
        /// Files or directories to lint, relative to the root (default: whole root)
        paths: Vec<PathBuf>,

        /// Project root; the script runs from here
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Script to execute (overrides checkstyle.script)
        #[arg(long, env = "CHECKSTYLE_LINT_SCRIPT")]
        script: Option<String>,
    },

    /// List accepted configuration options
    ListOptions,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-issue compact format.
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            root,
            format,
            script,
        } => {
            let source = config_resolver::resolve(&root, cli.config.as_deref());
            commands::check::run(&root, &paths, format, script, &source).await
        }
        Commands::ListOptions => {
            commands::list_options::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
