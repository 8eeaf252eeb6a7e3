use std::path::PathBuf;

use axum::extract::Multipart;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::video::models::UpdateVideoCommand;
use crate::domain::video::models::VideoId;
use crate::domain::video::ports::VideoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::multipart::stage_field;
use crate::inbound::http::router::AppState;

pub async fn update_video(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<VideoData>, ApiError> {
    let video_id =
        VideoId::from_string(&video_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let mut title = None;
    let mut description = None;
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
            Some("thumbnail") => thumbnail = Some(stage_field(&state.staging_dir, field).await?),
            _ => {}
        }
    }

    state
        .video_service
        .update(
            &video_id,
            &current_user.id,
            UpdateVideoCommand {
                title,
                description,
                thumbnail,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref video| {
            ApiSuccess::new(StatusCode::OK, "Video updated successfully", video.into())
        })
}
