//! Core error types (deterministic only)

use thiserror::Error;

/// Errors raised while aligning or serializing annotations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Offsets do not satisfy the view's `validate_offset`
    #[error("invalid offset ({start}, {end})")]
    InvalidOffset {
        /// Requested start offset
        start: usize,
        /// Requested end offset (inclusive)
        end: usize,
    },

    /// A tag position was claimed twice
    #[error("overlapping spans are found at ({start}, {end})")]
    OverlappingSpans {
        /// Aligned start of the rejected span
        start: usize,
        /// Aligned end of the rejected span (inclusive)
        end: usize,
    },

    /// Entity constructed with `start > end`
    #[error("invalid span: start {start} is after end {end}")]
    InvalidSpan {
        /// Start offset
        start: usize,
        /// End offset
        end: usize,
    },

    /// Token and spacing sequences differ in length
    #[error("{tokens} tokens but {flags} spacing flags")]
    SpacingMismatch {
        /// Number of tokens
        tokens: usize,
        /// Number of `space_after` flags
        flags: usize,
    },

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Json(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
