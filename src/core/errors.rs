//! Error types for the lintgate library.
//!
//! This module provides structured error handling for discovery and gate
//! operations, with error types that preserve context and enable proper
//! propagation from the library out to the CLI exit status.

use std::io;

use thiserror::Error;

/// Main result type for lintgate operations.
pub type Result<T> = std::result::Result<T, LintgateError>;

/// Comprehensive error type for all lintgate operations.
#[derive(Error, Debug)]
pub enum LintgateError {
    /// I/O related errors (file operations, process spawning, etc.)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// File discovery errors
    #[error("Discovery error: {message}")]
    Discovery {
        /// Error description
        message: String,
        /// Root path being scanned when the error occurred
        root: Option<String>,
    },

    /// Check execution errors (spawn failures, not lint findings)
    #[error("Check '{check}' error: {message}")]
    Check {
        /// Name of the check that failed to execute
        check: String,
        /// Error description
        message: String,
        /// Underlying I/O error from process spawning
        #[source]
        source: Option<io::Error>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl LintgateError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a configuration error tied to a specific field
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new discovery error
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
            root: None,
        }
    }

    /// Create a discovery error tied to a scan root
    pub fn discovery_at(message: impl Into<String>, root: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
            root: Some(root.into()),
        }
    }

    /// Create a new check execution error
    pub fn check(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Check {
            check: check.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a check execution error wrapping a spawn failure
    pub fn check_spawn(
        check: impl Into<String>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::Check {
            check: check.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error tied to a specific field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for LintgateError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML processing failed: {error}"),
            source: Some(Box::new(error)),
        }
    }
}

impl From<serde_json::Error> for LintgateError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON processing failed: {error}"),
            source: Some(Box::new(error)),
        }
    }
}
