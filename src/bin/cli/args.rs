//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the lintgate CLI binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use lintgate::io::output::FileListFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shebang-Aware Python Lint Gate
#[derive(Parser)]
#[command(name = "lintgate")]
#[command(version = VERSION)]
#[command(about = "🚦 Lintgate - Shebang-Aware Python Lint Gate")]
#[command(long_about = "
Discover the Python scripts in a repository by shebang line and gate CI on
independent lint checks run against the discovered file list.

Common Usage:

  # Print the discovered script list
  lintgate discover

  # Emit the file list as a GitHub Actions output value
  lintgate discover --format github-output >> \"$GITHUB_OUTPUT\"

  # Run the full gate (errors-only pylint + flake8 pyflakes family)
  lintgate gate

  # Run a single named check
  lintgate gate --only errors

  # Archive a machine-readable report alongside the console output
  lintgate gate --out reports/gate.json

  # Generate a starter configuration file
  lintgate init-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover scripts by shebang line and print the file list
    Discover(DiscoverArgs),

    /// Discover scripts, run the configured lint checks, and fail on findings
    Gate(GateArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a lintgate configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),

    /// List the configured lint checks and their status
    #[command(name = "list-checks")]
    ListChecks(ListChecksArgs),
}

#[derive(Args)]
pub struct DiscoverArgs {
    /// Root directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the file list
    #[arg(short, long, value_enum, default_value = "lines")]
    pub format: FileListFormatArg,

    /// Write the file list to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct GateArgs {
    /// Root directory to scan and lint (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run only the named checks (repeatable)
    #[arg(long)]
    pub only: Vec<String>,

    /// Run checks one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,

    /// Output format for the gate result
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: ReportFormatArg,

    /// Write a JSON report to this path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".lintgate.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show detailed configuration breakdown
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct ListChecksArgs {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// File-list encodings selectable from the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum FileListFormatArg {
    /// One path per line
    Lines,
    /// Space-separated paths on a single line
    Space,
    /// JSON array of paths
    Json,
    /// filelist=<paths> line for a GitHub Actions output file
    GithubOutput,
}

impl From<FileListFormatArg> for FileListFormat {
    fn from(format: FileListFormatArg) -> Self {
        match format {
            FileListFormatArg::Lines => FileListFormat::Lines,
            FileListFormatArg::Space => FileListFormat::Space,
            FileListFormatArg::Json => FileListFormat::Json,
            FileListFormatArg::GithubOutput => FileListFormat::GithubOutput,
        }
    }
}

/// Gate result renderings selectable from the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    /// Human-readable console output
    Pretty,
    /// Machine-readable JSON report on stdout
    Json,
}
