#![forbid(unsafe_code)]

use std::fmt;

/// Misuse of a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// The text or geometry changed since the last
    /// [`layout`](crate::Document::layout).
    StaleLayout,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleLayout => write!(f, "document changed since last layout; call layout() first"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
