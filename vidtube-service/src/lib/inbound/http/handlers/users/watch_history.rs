use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoWithOwnerData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn watch_history(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<VideoWithOwnerData>>, ApiError> {
    state
        .user_service
        .watch_history(&current_user.id)
        .await
        .map_err(ApiError::from)
        .map(|history| {
            ApiSuccess::new(
                StatusCode::OK,
                "Watch history fetched successfully",
                history.iter().map(Into::into).collect(),
            )
        })
}
