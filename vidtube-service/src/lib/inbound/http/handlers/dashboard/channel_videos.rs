use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn channel_videos(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<VideoData>>, ApiError> {
    state
        .dashboard_service
        .channel_videos(&current_user.id)
        .await
        .map_err(ApiError::from)
        .map(|videos| {
            ApiSuccess::new(
                StatusCode::OK,
                "Channel videos fetched successfully",
                videos.iter().map(Into::into).collect(),
            )
        })
}
