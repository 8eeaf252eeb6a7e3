use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::like::ports::LikeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoWithOwnerData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn liked_videos(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<VideoWithOwnerData>>, ApiError> {
    state
        .like_service
        .liked_videos(&current_user.id)
        .await
        .map_err(ApiError::from)
        .map(|videos| {
            ApiSuccess::new(
                StatusCode::OK,
                "Liked videos fetched successfully",
                videos.iter().map(Into::into).collect(),
            )
        })
}
