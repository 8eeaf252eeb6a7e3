use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::video::models::VideoId;
use crate::domain::video::ports::VideoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn toggle_publish(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
) -> Result<ApiSuccess<VideoData>, ApiError> {
    let video_id =
        VideoId::from_string(&video_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .video_service
        .toggle_publish(&video_id, &current_user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref video| {
            ApiSuccess::new(
                StatusCode::OK,
                "Publish status toggled successfully",
                video.into(),
            )
        })
}
