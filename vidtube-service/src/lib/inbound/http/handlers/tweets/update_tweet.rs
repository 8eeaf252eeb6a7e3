use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::tweet::models::TweetId;
use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::handlers::tweets::TweetData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_tweet(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(tweet_id): Path<String>,
    Json(body): Json<UpdateTweetRequestBody>,
) -> Result<ApiSuccess<TweetData>, ApiError> {
    let tweet_id =
        TweetId::from_string(&tweet_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .tweet_service
        .update(&tweet_id, &current_user.id, body.content)
        .await
        .map_err(ApiError::from)
        .map(|ref tweet| {
            ApiSuccess::new(StatusCode::OK, "Tweet updated successfully", tweet.into())
        })
}

#[derive(Debug, Deserialize)]
pub struct UpdateTweetRequestBody {
    content: String,
}
