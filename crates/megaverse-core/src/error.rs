//! Decoding error types.

use thiserror::Error;

/// A cell label that does not map to any placeable entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown soloon color in label: {0}")]
    UnknownColor(String),

    #[error("unknown cometh direction in label: {0}")]
    UnknownDirection(String),

    #[error("unrecognized entity label: {0}")]
    UnknownEntity(String),
}

impl DecodeError {
    /// The label that failed to decode.
    pub fn label(&self) -> &str {
        match self {
            DecodeError::UnknownColor(label)
            | DecodeError::UnknownDirection(label)
            | DecodeError::UnknownEntity(label) => label,
        }
    }
}
