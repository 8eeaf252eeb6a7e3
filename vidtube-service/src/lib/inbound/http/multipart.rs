use std::path::Path;
use std::path::PathBuf;

use axum::extract::multipart::Field;
use uuid::Uuid;

use crate::inbound::http::handlers::ApiError;

/// Write a multipart field to the local staging directory.
///
/// The staged copy keeps the client's file extension so the media store
/// can infer a content type. Callers hand the path to the media store,
/// which removes it after the upload attempt.
pub async fn stage_field(staging_dir: &Path, field: Field<'_>) -> Result<PathBuf, ApiError> {
    let extension = field
        .file_name()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let staged = staging_dir.join(format!("{}{}", Uuid::new_v4(), extension));

    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

    tokio::fs::create_dir_all(staging_dir)
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Failed to stage upload: {}", e)))?;

    tokio::fs::write(&staged, &bytes)
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Failed to stage upload: {}", e)))?;

    Ok(staged)
}

/// Best-effort removal of a staged file that never reached the media
/// store.
pub async fn discard_staged(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove staged file {}: {}", path.display(), e);
        }
    }
}
