//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use catalog_core::{CoreError, ImageError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No item at the requested position.
    #[error("{0}")]
    NotFound(String),

    /// Invalid input (blank fields, unsupported image).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Item store could not be read or is damaged.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Anything else reported by the core.
    #[error("{0}")]
    Core(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Storage(_) => 65,  // EX_DATAERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::IndexOutOfRange(i)) => {
                Self::NotFound(format!("No item at position {i}"))
            }
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::Image(ImageError::Io(msg)) => Self::Io(msg),
            CoreError::Image(image_err) => Self::Arguments(image_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
