//! Gate report generation.
//!
//! A gate run is summarized into a single serializable report: when it ran,
//! what it ran against, and how each check fared. The JSON form is what CI
//! jobs archive; the console rendering lives in the CLI layer.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::errors::{LintgateError, Result};
use crate::core::gate::{CheckOutcome, GateResult};

/// Serializable summary of one gate run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateReport {
    /// RFC 3339 timestamp of report generation
    pub generated_at: String,
    /// Discovery root the gate ran against
    pub root: String,
    /// Number of files passed to the checks
    pub files_checked: usize,
    /// Overall verdict
    pub passed: bool,
    /// Per-check outcomes, in configuration order
    pub checks: Vec<CheckOutcome>,
}

impl GateReport {
    /// Build a report from a finished gate run.
    pub fn from_result(root: &Path, result: &GateResult) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            root: root.display().to_string(),
            files_checked: result.files_checked,
            passed: result.passed,
            checks: result.outcomes.clone(),
        }
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Write the report as pretty JSON to `path`, creating parent
    /// directories as needed.
    pub fn write_json_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LintgateError::io(
                        format!("Failed to create report directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        std::fs::write(path, self.to_json_string()?).map_err(|e| {
            LintgateError::io(format!("Failed to write report: {}", path.display()), e)
        })
    }
}
