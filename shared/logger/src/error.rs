//! Error types for logging operations.

use std::io;
use thiserror::Error;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur during logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// I/O error from file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The writer thread is gone and can no longer accept records.
    #[error("log writer disconnected")]
    Disconnected,

    /// Unrecognised level name in configuration.
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),
}
