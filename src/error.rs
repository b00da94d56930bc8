//! Error types for workflow editing operations

/// Recoverable failures surfaced by editing operations. None of these
/// leave the session or its history in a partial state.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Step index {index} out of range (workflow has {len} steps)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to parse project document: {0}")]
    ParseError(String),

    #[error("Nothing to undo")]
    NothingToUndo,
}
