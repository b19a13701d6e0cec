//! Doctor Error Types
//!
//! This module defines the error types for the doctor system.
//! Probe failures abort the whole run; fix failures are isolated per check.

use thiserror::Error;

/// Errors raised by a healthcheck's diagnostic probe.
#[derive(Debug, Error)]
pub enum HealthcheckError {
    /// An external command could not be run or exited uncleanly
    #[error("Command failed: {0}")]
    Command(String),

    /// Probe output could not be interpreted
    #[error("Unreadable output: {0}")]
    Parse(String),

    /// I/O error while probing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider-specific failure
    #[error("{0}")]
    Other(String),
}

impl HealthcheckError {
    /// Create a Command error
    pub fn command(reason: impl Into<String>) -> Self {
        Self::Command(reason.into())
    }

    /// Create a Parse error
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse(reason.into())
    }

    /// Create an Other error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Errors raised by a fix action.
#[derive(Debug, Error)]
pub enum FixError {
    /// An external command failed; its captured output is kept for display
    #[error("Command failed: {message}")]
    Command {
        message: String,
        output: Option<String>,
    },

    /// I/O error during the fix
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other fix failure
    #[error("{0}")]
    Other(String),
}

impl FixError {
    /// Create a Command error with optional captured output
    pub fn command(message: impl Into<String>, output: Option<String>) -> Self {
        Self::Command {
            message: message.into(),
            output,
        }
    }

    /// Create an Other error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }

    /// Output captured from a failing external command, if any
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::Command { output, .. } => output.as_deref(),
            _ => None,
        }
    }
}

/// Fatal doctor-run failures.
///
/// Anything that reaches this type aborts the run; partial fix failures
/// never do and are reported inline instead.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// A diagnostic probe broke; its results would be unusable
    #[error("Failed to run diagnostics for {label}")]
    Diagnostic {
        label: String,
        #[source]
        source: HealthcheckError,
    },

    /// The automatic fix pass failed as a whole
    #[error("Failed to run automatic fixes")]
    FixRunner {
        output: Option<String>,
        #[source]
        source: FixError,
    },

    /// Keyboard or terminal plumbing failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl DoctorError {
    /// Create a Diagnostic error for the named healthcheck
    pub fn diagnostic(label: impl Into<String>, source: HealthcheckError) -> Self {
        Self::Diagnostic {
            label: label.into(),
            source,
        }
    }

    /// Create a FixRunner error, lifting captured output for display
    pub fn fix_runner(source: FixError) -> Self {
        Self::FixRunner {
            output: source.captured_output().map(str::to_string),
            source,
        }
    }

    /// Check if this error came from a diagnostic probe
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Diagnostic { .. })
    }

    /// Output a failing fix captured before dying, if any
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::FixRunner { output, .. } => output.as_deref(),
            _ => None,
        }
    }
}
