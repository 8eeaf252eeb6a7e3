use thiserror::Error;

use crate::domain::ownership::NotOwnerError;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Comment content is required")]
    EmptyContent,

    #[error("Comment not found: {0}")]
    NotFound(String),

    #[error("You are not authorized to modify this comment")]
    NotOwner(#[from] NotOwnerError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
