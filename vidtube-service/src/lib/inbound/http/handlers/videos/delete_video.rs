use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::video::models::VideoId;
use crate::domain::video::ports::VideoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_video(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    let video_id =
        VideoId::from_string(&video_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .video_service
        .delete(&video_id, &current_user.id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Video deleted successfully",
        serde_json::json!({}),
    ))
}
