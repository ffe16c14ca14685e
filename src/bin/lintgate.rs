#!/usr/bin/env rust
//! Lintgate CLI - Shebang-Aware Python Lint Gate
//!
//! This binary discovers the Python scripts in a repository by reading
//! shebang lines, prints the resulting file list for CI consumption, and
//! gates builds on independent lint checks run against that list.

use clap::Parser;
use tracing;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so the file list on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Discover(args) => {
            cli::discover_command(args).await?;
        }
        Commands::Gate(args) => {
            cli::gate_command(args).await?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config().await?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args).await?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args).await?;
        }
        Commands::ListChecks(args) => {
            cli::list_checks(args).await?;
        }
    }

    Ok(())
}
