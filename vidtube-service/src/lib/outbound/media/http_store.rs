use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::media::errors::MediaError;
use crate::domain::media::models::MediaKind;
use crate::domain::media::models::UploadedMedia;
use crate::domain::media::ports::MediaStore;

/// Media store adapter that pushes staged files to an external upload
/// service over HTTP. The staged file is removed after the attempt,
/// whether it succeeded or not.
pub struct HttpMediaStore {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
    duration: Option<f64>,
}

impl HttpMediaStore {
    pub fn new(upload_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url,
            api_key,
        }
    }

    async fn push(&self, local_path: &Path, kind: MediaKind) -> Result<UploadedMedia, MediaError> {
        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|e| MediaError::Staging(e.to_string()))?;

        let response = self
            .client
            .post(format!("{}/{}", self.upload_url, kind.as_str()))
            .header("x-api-key", &self.api_key)
            .body(bytes)
            .send()
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::UploadFailed(format!(
                "Upload service responded with {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;

        Ok(UploadedMedia {
            url: body.url,
            duration_secs: body.duration,
        })
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn upload(&self, local_path: &Path, kind: MediaKind) -> Result<UploadedMedia, MediaError> {
        let result = self.push(local_path, kind).await;

        self.discard(local_path).await;

        result
    }

    async fn discard(&self, local_path: &Path) {
        if let Err(e) = tokio::fs::remove_file(local_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to remove staged file {}: {}",
                    local_path.display(),
                    e
                );
            }
        }
    }
}
