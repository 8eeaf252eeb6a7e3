use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::comment::ports::CommentServicePort;
use crate::domain::video::models::VideoId;
use crate::inbound::http::handlers::comments::CommentWithOwnerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn add_comment(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
    Json(body): Json<AddCommentRequestBody>,
) -> Result<ApiSuccess<CommentWithOwnerData>, ApiError> {
    let video_id =
        VideoId::from_string(&video_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .comment_service
        .add(&video_id, &current_user.id, body.content)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Comment added successfully",
                comment.into(),
            )
        })
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequestBody {
    content: String,
}
