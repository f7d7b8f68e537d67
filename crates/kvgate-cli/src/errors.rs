//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use kvgate_core::KvError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// No value for the requested key
    NotFound { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
        }
    }
}

/// Exit code for a core storage error.
pub fn core_exit_code(err: &KvError) -> i32 {
    match err {
        KvError::InvalidArgument(_) | KvError::InvalidMethod(_) => exit_codes::INVALID_INPUT,
        KvError::HostMismatch { .. } => exit_codes::HOST_MISMATCH,
        KvError::Storage(_) => exit_codes::FAILURE,
    }
}

/// Exit code for any error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    if let Some(core) = err.downcast_ref::<KvError>() {
        return core_exit_code(core);
    }
    exit_codes::FAILURE
}

/// Hint printed under a core error, if one helps.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<KvError>()? {
        KvError::HostMismatch { .. } => {
            Some("Hint: cookies are only available in a browser; use --method persistent or ephemeral.")
        }
        KvError::InvalidMethod(_) => Some("Hint: valid methods are ephemeral, persistent, cookie."),
        _ => None,
    }
}
