//! Error types for the phpcs-runner CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for phpcs-runner operations.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// User provided invalid arguments (e.g. an unknown target).
    #[error("{0}")]
    UserError(String),

    /// The task file could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The external binary could not be launched or exited with failure.
    #[error("Execution failed: {0}")]
    ExecutionError(String),

    /// The runner could not produce its own output (e.g. JSON serialization).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RunnerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::UserError(_) => exit_codes::USER_ERROR,
            RunnerError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            RunnerError::ExecutionError(_) => exit_codes::EXECUTION_FAILURE,
            RunnerError::InternalError(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for phpcs-runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
