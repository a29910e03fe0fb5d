//! Error types for the command line tool.

use rcparams_common::RcError;

/// Main command error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Loading, validating or querying parameters failed.
    #[error(transparent)]
    Params(#[from] RcError),

    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type CliResult<T> = Result<T, CliError>;
