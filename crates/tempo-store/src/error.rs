//! Cursor error types.

use thiserror::Error;

/// Errors signalling cursor misuse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// `current` or `delete` called while the cursor is not positioned on a
    /// key: before the first `advance`, after exhaustion, or after `close`.
    #[error("cursor is not positioned on an entry")]
    NotPositioned,
}

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;
