//! Shared CLI plumbing: the error type, result alias, and exit codes.

use std::fmt;

/// Process exit codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Bad input or a state the user can correct.
    ValidationError = 1,
    /// Filesystem or serialization failure.
    IoError = 2,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error from a CLI command handler.
#[derive(Debug)]
pub enum CliError {
    /// Bad input or a state the user can correct.
    Validation(String),
    /// Filesystem or serialization failure.
    Io(String),
}

impl CliError {
    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;
