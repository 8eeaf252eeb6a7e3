use thiserror::Error;

use crate::domain::media::errors::MediaError;
use crate::domain::ownership::NotOwnerError;

/// Error for VideoId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VideoIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for video operations
#[derive(Debug, Clone, Error)]
pub enum VideoError {
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(#[from] VideoIdError),

    #[error("Title is required")]
    MissingTitle,

    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("You are not authorized to modify this video")]
    NotOwner(#[from] NotOwnerError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for VideoError {
    fn from(err: anyhow::Error) -> Self {
        VideoError::Unknown(err.to_string())
    }
}
