//! CLI-specific error types and exit codes.

use repolens_core::{ApiPortError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The backend rejected a request or could not be reached.
    #[error("{0}")]
    Api(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, data directory).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: see sysexits.h
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 69,       // EX_UNAVAILABLE
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<ApiPortError> for CliError {
    fn from(err: ApiPortError) -> Self {
        match err {
            ApiPortError::Configuration { message } => Self::Config(message),
            other => Self::Api(
                other
                    .server_message()
                    .map_or_else(|| other.to_string(), str::to_string),
            ),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
