//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// An input line could not be turned into a document
    InvalidRecord {
        /// File the record came from
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },
    /// Validation found problems
    ValidationFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidRecord { path, line, reason } => {
                write!(f, "Invalid record at {}:{line}: {reason}", path.display())
            }
            CliError::ValidationFailed(count) => {
                write!(f, "Validation failed: {count} problem(s) found")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
