//! CLI-specific error types and exit codes.

use crisislens_core::{SettingsError, SubmitError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The analysis request failed; the message was already shown.
    #[error("{0}")]
    Analysis(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server could not be started.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to an exit code (sysexits.h where one fits).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Analysis(_) => 1,
            Self::Server(_) => 70, // EX_SOFTWARE
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SubmitError> for CliError {
    fn from(err: SubmitError) -> Self {
        Self::Analysis(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_category() {
        assert_eq!(CliError::Analysis("x".into()).exit_code(), 1);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Server("x".into()).exit_code(), 70);
    }

    #[test]
    fn settings_errors_are_config_errors() {
        let err: CliError = SettingsError::EmptyModel.into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn submit_error_keeps_bare_message() {
        let err: CliError = SubmitError::network("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
    }
}
