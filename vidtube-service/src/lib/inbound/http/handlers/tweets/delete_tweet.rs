use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::tweet::models::TweetId;
use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_tweet(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(tweet_id): Path<String>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    let tweet_id =
        TweetId::from_string(&tweet_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .tweet_service
        .delete(&tweet_id, &current_user.id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Tweet deleted successfully",
        serde_json::json!({}),
    ))
}
