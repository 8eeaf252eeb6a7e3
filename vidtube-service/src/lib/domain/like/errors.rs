use thiserror::Error;

/// Top-level error for like operations
#[derive(Debug, Clone, Error)]
pub enum LikeError {
    #[error("{0} not found: {1}")]
    TargetNotFound(&'static str, String),

    #[error("No liked videos found")]
    NoLikedVideos,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
