//! Console display helpers for the lintgate CLI.

use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use lintgate::core::gate::{CheckStatus, GateResult};

/// Print the tool banner.
pub fn print_header() {
    println!();
    println!(
        "{}",
        "🚦 Lintgate - Shebang-Aware Python Lint Gate"
            .bright_blue()
            .bold()
    );
    println!();
}

/// Spinner shown while checks run. Hidden when stdout is not a terminal so
/// CI logs stay clean.
pub fn check_spinner(message: &str) -> ProgressBar {
    if !Term::stdout().is_term() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Display the per-check outcome table.
pub fn display_gate_outcomes(result: &GateResult) {
    println!();
    println!("{}", "🧪 Check Results".bright_blue().bold());

    for outcome in &result.outcomes {
        let label = match outcome.status {
            CheckStatus::Passed => format!("✅ {}", outcome.name.green()),
            CheckStatus::Skipped => format!("⏭  {}", outcome.name.dimmed()),
            CheckStatus::Failed => format!("❌ {}", outcome.name.red().bold()),
            CheckStatus::Error => format!("💥 {}", outcome.name.red().bold()),
        };

        match outcome.status {
            CheckStatus::Skipped => println!("  {label}"),
            _ => {
                let exit = outcome
                    .exit_code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("  {label} (exit: {exit}, {} ms)", outcome.duration_ms);
            }
        }
    }
}

/// Display the findings from each failed check.
pub fn display_gate_failures(result: &GateResult) {
    for outcome in result.failed_outcomes() {
        println!();
        println!(
            "{} {}",
            "❌ Findings from".red().bold(),
            outcome.name.bold()
        );

        let findings = if outcome.stdout.trim().is_empty() {
            &outcome.stderr
        } else {
            &outcome.stdout
        };

        for line in findings.lines().take(50) {
            println!("    {line}");
        }
    }
}
