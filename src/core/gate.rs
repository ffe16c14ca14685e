//! Lint gate execution.
//!
//! The gate consumes the discovered file list and runs each configured
//! check as an independent unit of work. Checks share no state and have no
//! ordering dependency, so they run concurrently by default; a failing
//! check marks its own outcome without affecting the others, and the gate
//! fails when any check does.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use futures::future;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::core::config::CheckConfig;
use crate::core::errors::{LintgateError, Result};

/// Terminal state of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The check ran and reported no findings
    Passed,
    /// The check ran and reported at least one finding
    Failed,
    /// The check did not run (empty file list or disabled)
    Skipped,
    /// The check command could not be executed
    Error,
}

/// Result of one check invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Name of the check this outcome belongs to
    pub name: String,
    /// Terminal state of the check
    pub status: CheckStatus,
    /// Exit code reported by the check command, when it ran
    pub exit_code: Option<i32>,
    /// Captured standard output (the linter's findings)
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall-clock duration of the invocation in milliseconds
    pub duration_ms: u64,
}

impl CheckOutcome {
    /// Whether this outcome keeps the gate open.
    pub fn passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed | CheckStatus::Skipped)
    }

    fn skipped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Skipped,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration_ms: 0,
        }
    }

    fn errored(name: &str, message: String) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            exit_code: None,
            stdout: String::new(),
            stderr: message,
            duration_ms: 0,
        }
    }
}

/// Aggregate result of a gate run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateResult {
    /// True when every check passed or was skipped
    pub passed: bool,
    /// Number of files the checks ran against
    pub files_checked: usize,
    /// Per-check outcomes, in configuration order
    pub outcomes: Vec<CheckOutcome>,
}

impl GateResult {
    /// Outcomes that caused the gate to fail.
    pub fn failed_outcomes(&self) -> Vec<&CheckOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed())
            .collect()
    }
}

/// Service responsible for executing a single check against the file list.
///
/// Implementations invoke the check command with the file list as
/// positional arguments and translate the exit status into an outcome.
#[async_trait]
pub trait CheckRunner: Send + Sync {
    /// Runs one check against the discovered files.
    ///
    /// # Arguments
    /// * `check` - Check definition (command and selection flags)
    /// * `root` - Discovery root, used as the working directory
    /// * `files` - Relative file paths to lint
    async fn run(
        &self,
        check: &CheckConfig,
        root: &Path,
        files: &[PathBuf],
    ) -> Result<CheckOutcome>;
}

/// Default runner spawning the check command as a child process.
///
/// The command runs with the discovery root as its working directory so the
/// relative file list is valid argv input without further transformation.
#[derive(Default, Debug)]
pub struct ProcessCheckRunner;

/// [`CheckRunner`] implementation for [`ProcessCheckRunner`].
#[async_trait]
impl CheckRunner for ProcessCheckRunner {
    /// Spawns the check command and captures its output.
    async fn run(
        &self,
        check: &CheckConfig,
        root: &Path,
        files: &[PathBuf],
    ) -> Result<CheckOutcome> {
        let started = Instant::now();
        debug!(
            "Running check '{}' against {} files",
            check.name,
            files.len()
        );

        let output = Command::new(&check.command)
            .args(&check.args)
            .args(files)
            .current_dir(root)
            .output()
            .await
            .map_err(|err| {
                LintgateError::check_spawn(
                    check.name.as_str(),
                    format!("failed to invoke '{}'", check.command),
                    err,
                )
            })?;

        let status = if output.status.success() {
            CheckStatus::Passed
        } else {
            CheckStatus::Failed
        };

        Ok(CheckOutcome {
            name: check.name.clone(),
            status,
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}

/// Factory method for [`ProcessCheckRunner`].
impl ProcessCheckRunner {
    /// Returns a shared reference to the default process runner.
    pub fn shared() -> Arc<dyn CheckRunner> {
        Arc::new(Self::default())
    }
}

/// Run every configured check against the file list and aggregate the
/// outcomes.
///
/// An empty file list is a no-op success: every check is recorded as
/// skipped and nothing is spawned. Checks run concurrently unless
/// `sequential` is set; both modes produce identical observable results.
pub async fn run_gate(
    root: &Path,
    files: &[PathBuf],
    checks: &[CheckConfig],
    runner: &dyn CheckRunner,
    sequential: bool,
) -> Result<GateResult> {
    if files.is_empty() {
        info!("No files to lint; gate passes trivially");
        let outcomes = checks
            .iter()
            .map(|check| CheckOutcome::skipped(&check.name))
            .collect();
        return Ok(GateResult {
            passed: true,
            files_checked: 0,
            outcomes,
        });
    }

    let outcomes = if sequential {
        let mut outcomes = Vec::with_capacity(checks.len());
        for check in checks {
            outcomes.push(execute_check(runner, check, root, files).await);
        }
        outcomes
    } else {
        future::join_all(
            checks
                .iter()
                .map(|check| execute_check(runner, check, root, files)),
        )
        .await
    };

    let passed = outcomes.iter().all(CheckOutcome::passed);
    Ok(GateResult {
        passed,
        files_checked: files.len(),
        outcomes,
    })
}

/// Run one check, translating execution errors into an error outcome so a
/// broken check never prevents the others from reporting.
async fn execute_check(
    runner: &dyn CheckRunner,
    check: &CheckConfig,
    root: &Path,
    files: &[PathBuf],
) -> CheckOutcome {
    if !check.enabled {
        debug!("Check '{}' is disabled; skipping", check.name);
        return CheckOutcome::skipped(&check.name);
    }

    match runner.run(check, root, files).await {
        Ok(outcome) => {
            info!("Check '{}' finished: {:?}", outcome.name, outcome.status);
            outcome
        }
        Err(err) => {
            warn!("Check '{}' could not be executed: {err}", check.name);
            CheckOutcome::errored(&check.name, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, command: &str, args: &[&str]) -> CheckConfig {
        CheckConfig {
            name: name.to_string(),
            command: command.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            enabled: true,
        }
    }

    fn some_files() -> Vec<PathBuf> {
        vec![PathBuf::from("a.py"), PathBuf::from("b/c.py")]
    }

    /// Runner that must never be invoked; used to prove the empty-list
    /// short circuit.
    struct UnreachableRunner;

    #[async_trait]
    impl CheckRunner for UnreachableRunner {
        async fn run(
            &self,
            check: &CheckConfig,
            _root: &Path,
            _files: &[PathBuf],
        ) -> Result<CheckOutcome> {
            panic!("check '{}' must not run on an empty file list", check.name);
        }
    }

    #[tokio::test]
    async fn empty_file_list_is_a_noop_success() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![check("a", "true", &[]), check("b", "true", &[])];

        let result = run_gate(root.path(), &[], &checks, &UnreachableRunner, false)
            .await
            .unwrap();

        assert!(result.passed);
        assert_eq!(result.files_checked, 0);
        assert_eq!(result.outcomes.len(), 2);
        assert!(result
            .outcomes
            .iter()
            .all(|outcome| outcome.status == CheckStatus::Skipped));
    }

    #[tokio::test]
    async fn all_checks_passing_passes_the_gate() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![check("a", "true", &[]), check("b", "true", &[])];
        let runner = ProcessCheckRunner;

        let result = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();

        assert!(result.passed);
        assert_eq!(result.files_checked, 2);
        assert!(result
            .outcomes
            .iter()
            .all(|outcome| outcome.status == CheckStatus::Passed));
        assert!(result.failed_outcomes().is_empty());
    }

    #[tokio::test]
    async fn failing_check_fails_the_gate_but_not_its_peer() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![check("bad", "false", &[]), check("good", "true", &[])];
        let runner = ProcessCheckRunner;

        let result = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();

        assert!(!result.passed);
        assert_eq!(result.outcomes[0].status, CheckStatus::Failed);
        assert_eq!(result.outcomes[1].status, CheckStatus::Passed);

        let failed = result.failed_outcomes();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "bad");
    }

    #[tokio::test]
    async fn findings_and_exit_code_are_captured() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![check(
            "findings",
            "sh",
            &["-c", "echo undefined-name-f821; exit 1", "lint"],
        )];
        let runner = ProcessCheckRunner;

        let result = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();

        assert!(!result.passed);
        let outcome = &result.outcomes[0];
        assert_eq!(outcome.status, CheckStatus::Failed);
        assert_eq!(outcome.exit_code, Some(1));
        assert!(outcome.stdout.contains("undefined-name-f821"));
    }

    #[tokio::test]
    async fn file_list_is_passed_as_positional_arguments() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![check("argv", "sh", &["-c", "printf '%s ' \"$@\"", "lint"])];
        let runner = ProcessCheckRunner;

        let result = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();

        let outcome = &result.outcomes[0];
        assert!(outcome.stdout.contains("a.py"));
        assert!(outcome.stdout.contains("b/c.py"));
    }

    #[tokio::test]
    async fn unspawnable_command_is_a_tool_error() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![
            check("broken", "lintgate-test-no-such-command", &[]),
            check("good", "true", &[]),
        ];
        let runner = ProcessCheckRunner;

        let result = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();

        assert!(!result.passed);
        assert_eq!(result.outcomes[0].status, CheckStatus::Error);
        assert!(result.outcomes[0].stderr.contains("failed to invoke"));
        assert_eq!(result.outcomes[1].status, CheckStatus::Passed);
    }

    #[tokio::test]
    async fn disabled_checks_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        let mut failing = check("off", "false", &[]);
        failing.enabled = false;
        let checks = vec![failing, check("on", "true", &[])];
        let runner = ProcessCheckRunner;

        let result = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();

        assert!(result.passed);
        assert_eq!(result.outcomes[0].status, CheckStatus::Skipped);
        assert_eq!(result.outcomes[1].status, CheckStatus::Passed);
    }

    #[tokio::test]
    async fn sequential_and_parallel_agree() {
        let root = tempfile::tempdir().unwrap();
        let checks = vec![check("bad", "false", &[]), check("good", "true", &[])];
        let runner = ProcessCheckRunner;

        let parallel = run_gate(root.path(), &some_files(), &checks, &runner, false)
            .await
            .unwrap();
        let sequential = run_gate(root.path(), &some_files(), &checks, &runner, true)
            .await
            .unwrap();

        assert_eq!(parallel.passed, sequential.passed);
        let statuses = |result: &GateResult| {
            result
                .outcomes
                .iter()
                .map(|outcome| outcome.status)
                .collect::<Vec<_>>()
        };
        assert_eq!(statuses(&parallel), statuses(&sequential));
    }
}
