//! # StoreError
//!
//! The failure side of every store operation. Callers get either a value or
//! an ordered, non-empty list of human-readable messages; nothing is thrown
//! past the operation boundary, so handling cannot be skipped.

use thiserror::Error;

/// The primary error type for all store operations.
///
/// The message strings are part of the observable contract and mirror the
/// constants in [`crate::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Lookup by id found no post.
    #[error("Post not found.")]
    PostNotFound,

    /// Lookup by id found no reply, or the reply was deleted (deleted
    /// replies are indistinguishable from missing ones for edits).
    #[error("Reply not found.")]
    ReplyNotFound,

    /// Content edits are rejected once a post is tombstoned.
    #[error("Cannot edit a deleted post.")]
    EditDeletedPost,

    /// Deletion requires an explicit confirmation from the caller's flow.
    #[error("Deletion not confirmed.")]
    DeletionNotConfirmed,

    /// One or more input violations, in validation order (title before body).
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
}

impl StoreError {
    /// The ordered list of messages for display. Never empty.
    pub fn messages(&self) -> Vec<String> {
        match self {
            StoreError::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Result alias used by every mutating or validated store operation.
pub type OpResult<T> = std::result::Result<T, StoreError>;
