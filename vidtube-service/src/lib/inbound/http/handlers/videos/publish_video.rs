use std::path::PathBuf;

use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::video::models::PublishVideoCommand;
use crate::domain::video::ports::VideoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::multipart::discard_staged;
use crate::inbound::http::multipart::stage_field;
use crate::inbound::http::router::AppState;

pub async fn publish_video(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<VideoData>, ApiError> {
    let mut title = None;
    let mut description = None;
    let mut video_file: Option<PathBuf> = None;
    let mut thumbnail: Option<PathBuf> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => {
                title = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Malformed multipart field: {}", e))
                })?);
            }
            Some("description") => {
                description = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Malformed multipart field: {}", e))
                })?);
            }
            Some("video") => video_file = Some(stage_field(&state.staging_dir, field).await?),
            Some("thumbnail") => thumbnail = Some(stage_field(&state.staging_dir, field).await?),
            _ => {}
        }
    }

    let Some(video_file) = video_file else {
        if let Some(path) = &thumbnail {
            discard_staged(path).await;
        }
        return Err(ApiError::BadRequest("Video file is required".to_string()));
    };

    state
        .video_service
        .publish(
            &current_user.id,
            PublishVideoCommand {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
                video_file,
                thumbnail,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref video| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Video published successfully",
                video.into(),
            )
        })
}
