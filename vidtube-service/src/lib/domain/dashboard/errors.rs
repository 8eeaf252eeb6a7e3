use thiserror::Error;

/// Top-level error for dashboard operations
#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    #[error("No videos found for this channel")]
    NoVideos,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
