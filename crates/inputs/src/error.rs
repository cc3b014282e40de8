use thiserror::Error;

use crate::Key;

/// Errors raised while constructing or reading an input view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputsError {
    /// An integer position fell outside `-len..len`.
    #[error("index {index} is out of range for a view of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// A named index is neither a key of the view nor a usable position.
    #[error("key `{key}` not found")]
    KeyNotFound { key: Key },

    /// A nested view (indirectly) contains itself.
    #[error("cyclic structure: view at depth {depth} contains one of its ancestors")]
    CyclicStructure { depth: usize },

    /// Explicit type metadata does not have one tag per element.
    #[error("expected {expected} type tags, got {actual}")]
    TypeCountMismatch { expected: usize, actual: usize },

    /// A frame was given the same column name twice.
    #[error("duplicate column `{name}`")]
    DuplicateColumn { name: String },

    /// A frame column does not match the length of the first column.
    #[error("column `{name}` has {actual} rows, expected {expected}")]
    RaggedFrame {
        name: String,
        expected: usize,
        actual: usize,
    },
}
