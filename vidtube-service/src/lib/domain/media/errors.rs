use thiserror::Error;

/// Error for media store operations
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Staged file error: {0}")]
    Staging(String),
}
