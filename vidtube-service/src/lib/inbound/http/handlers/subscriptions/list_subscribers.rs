use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::subscription::ports::SubscriptionServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OwnerSummaryData;
use crate::inbound::http::router::AppState;

pub async fn list_subscribers(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Result<ApiSuccess<Vec<OwnerSummaryData>>, ApiError> {
    let channel_id = UserId::from_string(&channel_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid channel ID: {}", e)))?;

    state
        .subscription_service
        .subscribers(&channel_id)
        .await
        .map_err(ApiError::from)
        .map(|subscribers| {
            ApiSuccess::new(
                StatusCode::OK,
                "Subscribers fetched successfully",
                subscribers.iter().map(Into::into).collect(),
            )
        })
}
