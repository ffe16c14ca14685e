//! # Lintgate: Shebang-Aware Lint Gating for CI
//!
//! Lintgate discovers the Python scripts in a repository by reading shebang
//! lines instead of trusting file extensions, then gates a CI run on a set
//! of independent lint checks executed against the discovered file list:
//!
//! - **Discovery**: walks a root directory, collects every file whose first
//!   line is a `#!` interpreter line naming Python, and produces an ordered,
//!   duplicate-free list of relative paths
//! - **Gate**: runs each configured check (an external linter invocation
//!   taking the file list as positional arguments) and fails the run when
//!   any check reports findings
//!
//! The default gate reproduces the classic two-stage setup: an errors-only
//! `pylint` pass and a `flake8` pass restricted to the pyflakes rule family
//! (unused and undefined names).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use lintgate::core::discovery::discover_scripts;
//! use lintgate::core::gate::{run_gate, ProcessCheckRunner};
//! use lintgate::LintgateConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LintgateConfig::default();
//!     let root = Path::new(".");
//!
//!     let files = discover_scripts(root, &config.discovery)?;
//!     let runner = ProcessCheckRunner::shared();
//!     let result = run_gate(root, &files, &config.checks, runner.as_ref(), false).await?;
//!
//!     println!("gate passed: {}", result.passed);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core discovery and gate modules
pub mod core {
    //! Core discovery and gate logic.

    pub mod config;
    pub mod discovery;
    pub mod errors;
    pub mod gate;
}

// I/O and reporting
pub mod io {
    //! File-list rendering and gate report output.

    pub mod output;
    pub mod reports;
}

// Re-export primary types for convenience
pub use crate::core::config::{CheckConfig, DiscoveryConfig, LintgateConfig};
pub use crate::core::errors::{LintgateError, Result};
pub use crate::core::gate::{CheckOutcome, CheckStatus, GateResult};
pub use crate::io::reports::GateReport;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
