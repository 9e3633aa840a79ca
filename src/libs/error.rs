//! Error types for board operations.

use crate::db::local_storage::StorageError;
use thiserror::Error;

/// Errors that can occur while building or operating on the board.
///
/// Unknown task ids and malformed persisted data are not errors:
/// the store treats those as no-ops.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Task text was empty or whitespace only.
    #[error("Task text must not be empty")]
    EmptyTaskText,

    /// A column name other than `todo`, `in-progress` or `done`.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown sound theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown sound cue: {0}")]
    UnknownCue(String),

    #[error("Unknown swipe direction: {0}")]
    UnknownDirection(String),

    /// The storage medium could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
