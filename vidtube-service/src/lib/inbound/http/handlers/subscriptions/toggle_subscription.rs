use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::subscription::models::SubscriptionOutcome;
use crate::domain::subscription::ports::SubscriptionServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

// Subscribe responds 201, unsubscribe 200.
pub async fn toggle_subscription(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(channel_id): Path<String>,
) -> Result<ApiSuccess<ToggleSubscriptionResponseData>, ApiError> {
    let channel_id = UserId::from_string(&channel_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid channel ID: {}", e)))?;

    let outcome = state
        .subscription_service
        .toggle(&channel_id, &current_user.id)
        .await?;

    let (status, message) = match outcome {
        SubscriptionOutcome::Subscribed => (StatusCode::CREATED, "Subscribed to channel"),
        SubscriptionOutcome::Unsubscribed => (StatusCode::OK, "Unsubscribed from channel"),
    };

    Ok(ApiSuccess::new(
        status,
        message,
        ToggleSubscriptionResponseData {
            is_subscribed: outcome.is_subscribed(),
        },
    ))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSubscriptionResponseData {
    pub is_subscribed: bool,
}
