//! Command Execution Logic
//!
//! This module contains the main command execution logic: discovery output,
//! gate orchestration, and configuration management.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use tabled::{
    settings::Style as TableStyle,
    Table, Tabled,
};
use tracing::info;

use lintgate::core::discovery::discover_scripts;
use lintgate::core::gate::{run_gate, ProcessCheckRunner};
use lintgate::io::output::render_file_list;
use lintgate::io::reports::GateReport;
use lintgate::{CheckConfig, LintgateConfig};

use crate::cli::args::*;
use crate::cli::display;

/// Load configuration from an explicit file, falling back to defaults.
pub async fn load_configuration(
    config_path: Option<&PathBuf>,
) -> anyhow::Result<LintgateConfig> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            LintgateConfig::from_yaml_file(path)?
        }
        None => {
            info!("Using default configuration");
            LintgateConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}

/// Main discover command implementation
pub async fn discover_command(args: DiscoverArgs) -> anyhow::Result<()> {
    let config = load_configuration(args.config.as_ref()).await?;

    let files = discover_scripts(&args.path, &config.discovery)?;
    let rendered = render_file_list(&files, args.format.into())?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, format!("{rendered}\n")).await?;
            println!(
                "{} {}",
                "✅ File list written to:".green(),
                path.display().to_string().cyan()
            );
        }
        None => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
    }

    Ok(())
}

/// Main gate command implementation
pub async fn gate_command(args: GateArgs) -> anyhow::Result<()> {
    // JSON-on-stdout mode keeps stdout machine-readable
    let machine_output = matches!(args.format, ReportFormatArg::Json) && args.out.is_none();
    let quiet = args.quiet || machine_output;

    if !quiet {
        display::print_header();
    }

    let config = load_configuration(args.config.as_ref()).await?;
    let checks = select_checks(&config, &args.only)?;

    let files = discover_scripts(&args.path, &config.discovery)?;

    if !quiet {
        println!(
            "{} {}",
            "📂 Root:".bold(),
            args.path.display().to_string().cyan()
        );
        println!(
            "{} {}",
            "📄 Scripts discovered:".bold(),
            files.len().to_string().cyan()
        );
    }

    let spinner = if quiet {
        None
    } else {
        Some(display::check_spinner("Running lint checks..."))
    };

    let runner = ProcessCheckRunner::shared();
    let result = run_gate(&args.path, &files, &checks, runner.as_ref(), args.sequential).await?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = GateReport::from_result(&args.path, &result);

    if let Some(out) = &args.out {
        report.write_json_file(out)?;
        if !quiet {
            println!(
                "{} {}",
                "📝 Report written to:".bold(),
                out.display().to_string().cyan()
            );
        }
    }

    match args.format {
        ReportFormatArg::Json => {
            if machine_output {
                println!("{}", report.to_json_string()?);
            }
        }
        ReportFormatArg::Pretty => {
            display::display_gate_outcomes(&result);
        }
    }

    if !result.passed {
        if !quiet {
            display::display_gate_failures(&result);
            println!();
            println!("{}", "❌ Lint gate failed".red().bold());
        }
        // Exit with code 1 to fail CI/CD
        std::process::exit(1);
    }

    if !quiet {
        println!();
        println!("{}", "✅ Lint gate passed".green().bold());
    }

    Ok(())
}

/// Resolve the `--only` selection against the configured checks.
fn select_checks(config: &LintgateConfig, only: &[String]) -> anyhow::Result<Vec<CheckConfig>> {
    if only.is_empty() {
        return Ok(config.checks.clone());
    }

    let mut selected = Vec::new();
    for name in only {
        match config.checks.iter().find(|check| &check.name == name) {
            Some(check) => selected.push(check.clone()),
            None => {
                let known = config
                    .checks
                    .iter()
                    .map(|check| check.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow::bail!("unknown check '{name}'; configured checks: {known}");
            }
        }
    }

    Ok(selected)
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default lintgate configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!("{}", "# Usage: lintgate gate --config your-config.yml".dimmed());
    println!();

    let config = LintgateConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    // Check if file exists and force not specified
    if args.output.exists() && !args.force {
        eprintln!(
            "{} {}",
            "❌ Configuration file already exists:".red(),
            args.output.display()
        );
        eprintln!("   Use --force to overwrite or choose a different name with --output");
        std::process::exit(1);
    }

    let config = LintgateConfig::default();
    config.to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit the configuration file to customize discovery and checks");
    println!(
        "   2. Run the gate with: {}",
        format!("lintgate gate --config {}", args.output.display()).cyan()
    );

    println!();
    println!("{}", "🔧 Key settings you can customize:".bright_blue().bold());

    #[derive(Tabled)]
    struct CustomizationRow {
        setting: String,
        description: String,
    }

    let customization_rows = vec![
        CustomizationRow {
            setting: "discovery.interpreter_pattern".to_string(),
            description: "Substring the shebang line must contain".to_string(),
        },
        CustomizationRow {
            setting: "discovery.exclude_patterns".to_string(),
            description: "Globs removed from discovery".to_string(),
        },
        CustomizationRow {
            setting: "checks".to_string(),
            description: "Lint commands run against the file list".to_string(),
        },
    ];

    let mut table = Table::new(customization_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a lintgate configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.config)).await {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Ensure check names are unique and commands non-empty");
            println!("   • Verify glob patterns compile");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'lintgate print-default-config' to see valid format".dimmed()
            );
            std::process::exit(1);
        }
    };

    println!(
        "{} {}",
        "Interpreter pattern:".bold(),
        config.discovery.interpreter_pattern.cyan()
    );
    println!(
        "{} {}",
        "Configured checks:".bold(),
        config.checks.len().to_string().cyan()
    );

    if args.verbose {
        println!();
        println!("{}", "🔧 Detailed Settings".bright_blue().bold());
        println!();
        print_check_table(&config);
    }

    Ok(())
}

/// List the configured checks and their invocations
pub async fn list_checks(args: ListChecksArgs) -> anyhow::Result<()> {
    let config = load_configuration(args.config.as_ref()).await?;
    print_check_table(&config);
    Ok(())
}

fn print_check_table(config: &LintgateConfig) {
    #[derive(Tabled)]
    struct CheckRow {
        name: String,
        invocation: String,
        enabled: String,
    }

    let rows: Vec<CheckRow> = config
        .checks
        .iter()
        .map(|check| CheckRow {
            name: check.name.clone(),
            invocation: check.invocation(),
            enabled: check.enabled.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}
