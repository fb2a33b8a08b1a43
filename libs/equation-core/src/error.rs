//! Error types for equation-core.

use crate::types::ChildSlot;
use thiserror::Error;

/// Result type alias using PathError.
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors raised when a path fails to resolve against the current tree.
///
/// A failed mutation is rejected whole: the caller keeps the prior tree
/// unchanged and must derive a fresh path before retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("index {index} out of bounds for container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("cannot descend into leaf token {token}")]
    DescendIntoLeaf { token: String },

    #[error("item has no child slot named {slot}")]
    MissingSlot { slot: ChildSlot },

    #[error("container path must alternate index and child-slot steps")]
    MalformedPath,

    #[error("item path must end in an index step")]
    NotAnItemPath,
}
