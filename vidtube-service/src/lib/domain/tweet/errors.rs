use thiserror::Error;

use crate::domain::ownership::NotOwnerError;

/// Error for TweetId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TweetIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for tweet operations
#[derive(Debug, Clone, Error)]
pub enum TweetError {
    #[error("Invalid tweet ID: {0}")]
    InvalidTweetId(#[from] TweetIdError),

    #[error("Tweet content is required")]
    EmptyContent,

    #[error("Tweet not found: {0}")]
    NotFound(String),

    #[error("You are not authorized to modify this tweet")]
    NotOwner(#[from] NotOwnerError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
