use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::subscription::ports::SubscriptionServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OwnerSummaryData;
use crate::inbound::http::router::AppState;

pub async fn list_subscribed_channels(
    State(state): State<AppState>,
    Path(subscriber_id): Path<String>,
) -> Result<ApiSuccess<Vec<OwnerSummaryData>>, ApiError> {
    let subscriber_id = UserId::from_string(&subscriber_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid subscriber ID: {}", e)))?;

    state
        .subscription_service
        .subscribed_channels(&subscriber_id)
        .await
        .map_err(ApiError::from)
        .map(|channels| {
            ApiSuccess::new(
                StatusCode::OK,
                "Subscribed channels fetched successfully",
                channels.iter().map(Into::into).collect(),
            )
        })
}
