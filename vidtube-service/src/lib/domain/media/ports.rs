use std::path::Path;

use async_trait::async_trait;

use crate::domain::media::errors::MediaError;
use crate::domain::media::models::MediaKind;
use crate::domain::media::models::UploadedMedia;

/// Port for the external binary-object upload service.
///
/// Implementations take a locally staged file, push it to the store, and
/// remove the staged copy on both the success and failure paths.
#[async_trait]
pub trait MediaStore: Send + Sync + 'static {
    /// Upload a staged file and return its public URL.
    ///
    /// # Arguments
    /// * `local_path` - Staged file on local disk
    /// * `kind` - Image or video processing pipeline
    ///
    /// # Errors
    /// * `UploadFailed` - The store rejected the upload
    /// * `Staging` - The staged file could not be read
    async fn upload(&self, local_path: &Path, kind: MediaKind)
        -> Result<UploadedMedia, MediaError>;

    /// Remove a staged file that will not be uploaded.
    ///
    /// Best effort: a missing file is not an error, other failures are
    /// logged and swallowed.
    async fn discard(&self, local_path: &Path);
}
