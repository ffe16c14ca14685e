//! Configuration types and management for lintgate.
//!
//! Discovery settings and the check roster are serde-backed so the whole
//! configuration round-trips through the YAML file written by
//! `lintgate init-config`.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::discovery;
use crate::core::errors::{LintgateError, Result};

/// Main configuration for the lintgate tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintgateConfig {
    /// File discovery configuration
    pub discovery: DiscoveryConfig,

    /// Lint checks run against the discovered file list, in order
    pub checks: Vec<CheckConfig>,
}

/// Settings controlling shebang-based file discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Substring the shebang line must contain to select a file
    pub interpreter_pattern: String,

    /// Glob patterns a relative path must match to be considered
    pub include_patterns: Vec<String>,

    /// Glob patterns that exclude a relative path from consideration
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_file_size_bytes: u64,

    /// Whether to honor `.gitignore` rules during traversal
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

/// A single lint check invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Unique name identifying the check in output and reports
    pub name: String,

    /// Program to invoke
    pub command: String,

    /// Severity or rule-selection flags passed before the file list
    #[serde(default)]
    pub args: Vec<String>,

    /// Whether the check participates in the gate
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LintgateConfig {
    fn default() -> Self {
        Self::new_with_defaults()
    }
}

impl LintgateConfig {
    /// Construct a configuration using the canonical default values shared by
    /// the CLI and the library API. Keeping this in one place prevents the
    /// configuration surfaces from drifting apart.
    pub(crate) fn new_with_defaults() -> Self {
        Self {
            discovery: DiscoveryConfig::default(),
            checks: Self::default_checks(),
        }
    }

    /// The two-stage gate run by the stock CI workflow: an errors-only pylint
    /// pass and a flake8 pass restricted to the pyflakes rule family.
    fn default_checks() -> Vec<CheckConfig> {
        vec![
            CheckConfig {
                name: "errors".to_string(),
                command: "pylint".to_string(),
                args: vec!["--errors-only".to_string()],
                enabled: true,
            },
            CheckConfig {
                name: "pyflakes".to_string(),
                command: "flake8".to_string(),
                args: vec!["--select=F".to_string()],
                enabled: true,
            },
        ]
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            LintgateError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            LintgateError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate the configuration for internal consistency.
    ///
    /// Rejects empty or duplicate check names, empty commands, an empty
    /// interpreter pattern, and glob patterns that fail to compile.
    pub fn validate(&self) -> Result<()> {
        if self.discovery.interpreter_pattern.trim().is_empty() {
            return Err(LintgateError::validation_field(
                "interpreter pattern must not be empty",
                "discovery.interpreter_pattern",
            ));
        }

        discovery::compile_globset(&self.discovery.include_patterns)
            .map_err(|e| LintgateError::validation(format!("include patterns: {e}")))?;
        discovery::compile_globset(&self.discovery.exclude_patterns)
            .map_err(|e| LintgateError::validation(format!("exclude patterns: {e}")))?;

        let mut seen = HashSet::new();
        for check in &self.checks {
            if check.name.trim().is_empty() {
                return Err(LintgateError::validation_field(
                    "check name must not be empty",
                    "checks.name",
                ));
            }
            if check.command.trim().is_empty() {
                return Err(LintgateError::validation_field(
                    format!("check '{}' has an empty command", check.name),
                    "checks.command",
                ));
            }
            if !seen.insert(check.name.clone()) {
                return Err(LintgateError::validation_field(
                    format!("duplicate check name '{}'", check.name),
                    "checks.name",
                ));
            }
        }

        Ok(())
    }

    /// Returns the enabled checks, preserving configuration order.
    pub fn enabled_checks(&self) -> Vec<&CheckConfig> {
        self.checks.iter().filter(|check| check.enabled).collect()
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            interpreter_pattern: "python".to_string(),
            include_patterns: vec!["**/*".to_string()],
            exclude_patterns: Vec::new(),
            max_file_size_bytes: 0,
            respect_gitignore: true,
        }
    }
}

impl CheckConfig {
    /// Render the invocation for display purposes (`command arg1 arg2`).
    pub fn invocation(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_two_stage_gate() {
        let config = LintgateConfig::default();
        assert_eq!(config.checks.len(), 2);
        assert_eq!(config.checks[0].name, "errors");
        assert_eq!(config.checks[0].command, "pylint");
        assert_eq!(config.checks[0].args, vec!["--errors-only"]);
        assert_eq!(config.checks[1].name, "pyflakes");
        assert_eq!(config.checks[1].command, "flake8");
        assert_eq!(config.checks[1].args, vec!["--select=F"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_discovery_targets_python_shebangs() {
        let discovery = DiscoveryConfig::default();
        assert_eq!(discovery.interpreter_pattern, "python");
        assert!(discovery.respect_gitignore);
        assert_eq!(discovery.max_file_size_bytes, 0);
    }

    #[test]
    fn validate_rejects_duplicate_check_names() {
        let mut config = LintgateConfig::default();
        config.checks.push(config.checks[0].clone());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate check name"));
    }

    #[test]
    fn validate_rejects_empty_command() {
        let mut config = LintgateConfig::default();
        config.checks[0].command = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_globs() {
        let mut config = LintgateConfig::default();
        config.discovery.exclude_patterns = vec!["[invalid".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn yaml_round_trip_preserves_checks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lintgate.yml");

        let config = LintgateConfig::default();
        config.to_yaml_file(&path).unwrap();

        let loaded = LintgateConfig::from_yaml_file(&path).unwrap();
        assert_eq!(loaded.checks.len(), config.checks.len());
        assert_eq!(loaded.checks[1].args, config.checks[1].args);
        assert_eq!(
            loaded.discovery.interpreter_pattern,
            config.discovery.interpreter_pattern
        );
    }

    #[test]
    fn enabled_checks_skips_disabled_entries() {
        let mut config = LintgateConfig::default();
        config.checks[0].enabled = false;
        let enabled = config.enabled_checks();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].name, "pyflakes");
    }

    #[test]
    fn invocation_joins_command_and_flags() {
        let check = CheckConfig {
            name: "errors".to_string(),
            command: "pylint".to_string(),
            args: vec!["--errors-only".to_string()],
            enabled: true,
        };
        assert_eq!(check.invocation(), "pylint --errors-only");
    }
}
