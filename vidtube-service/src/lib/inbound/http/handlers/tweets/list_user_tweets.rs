use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::tweet::ports::TweetServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::tweets::TweetWithOwnerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_user_tweets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<Vec<TweetWithOwnerData>>, ApiError> {
    let user_id = UserId::from_string(&user_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid user ID: {}", e)))?;

    state
        .tweet_service
        .list_for_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|tweets| {
            ApiSuccess::new(
                StatusCode::OK,
                "Tweets fetched successfully",
                tweets.iter().map(Into::into).collect(),
            )
        })
}
