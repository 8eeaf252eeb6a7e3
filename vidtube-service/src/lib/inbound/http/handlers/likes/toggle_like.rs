use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::comment::models::CommentId;
use crate::domain::like::models::LikeTarget;
use crate::domain::like::models::ToggleOutcome;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::tweet::models::TweetId;
use crate::domain::video::models::VideoId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn toggle_video_like(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
) -> Result<ApiSuccess<ToggleLikeResponseData>, ApiError> {
    let video_id = VideoId::from_string(&video_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid video ID: {}", e)))?;

    toggle(&state, &current_user, LikeTarget::Video(video_id)).await
}

pub async fn toggle_comment_like(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(comment_id): Path<String>,
) -> Result<ApiSuccess<ToggleLikeResponseData>, ApiError> {
    let comment_id = CommentId::from_string(&comment_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid comment ID: {}", e)))?;

    toggle(&state, &current_user, LikeTarget::Comment(comment_id)).await
}

pub async fn toggle_tweet_like(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(tweet_id): Path<String>,
) -> Result<ApiSuccess<ToggleLikeResponseData>, ApiError> {
    let tweet_id = TweetId::from_string(&tweet_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid tweet ID: {}", e)))?;

    toggle(&state, &current_user, LikeTarget::Tweet(tweet_id)).await
}

// Like responds 201, unlike 200.
async fn toggle(
    state: &AppState,
    current_user: &CurrentUser,
    target: LikeTarget,
) -> Result<ApiSuccess<ToggleLikeResponseData>, ApiError> {
    let kind = target.kind();
    let outcome = state.like_service.toggle(&current_user.id, target).await?;

    let (status, message) = match outcome {
        ToggleOutcome::Liked => (StatusCode::CREATED, format!("{} liked", kind)),
        ToggleOutcome::Unliked => (StatusCode::OK, format!("{} unliked", kind)),
    };

    Ok(ApiSuccess::new(
        status,
        &message,
        ToggleLikeResponseData {
            is_liked: outcome.is_liked(),
        },
    ))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeResponseData {
    pub is_liked: bool,
}
