//! Error types for the packaging binary.
//!
//! Wraps archive errors and argument errors with recovery suggestions for the
//! command line.

use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Archive errors
    #[error("{0}")]
    Archive(#[from] crate::archive::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackagerError::Archive(e) if e.is_not_found() => vec![
                "Check that the bundle path is spelled correctly".to_string(),
                "Build the framework bundle before packaging it".to_string(),
            ],
            _ => vec![],
        }
    }
}
