use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::handlers::tweets::TweetData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_tweet(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateTweetRequestBody>,
) -> Result<ApiSuccess<TweetData>, ApiError> {
    state
        .tweet_service
        .create(&current_user.id, body.content)
        .await
        .map_err(ApiError::from)
        .map(|ref tweet| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Tweet created successfully",
                tweet.into(),
            )
        })
}

#[derive(Debug, Deserialize)]
pub struct CreateTweetRequestBody {
    content: String,
}
