use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::handlers::comments::CommentData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_comment(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(comment_id): Path<String>,
    Json(body): Json<UpdateCommentRequestBody>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let comment_id =
        CommentId::from_string(&comment_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .comment_service
        .update(&comment_id, &current_user.id, body.content)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| {
            ApiSuccess::new(StatusCode::OK, "Comment updated successfully", comment.into())
        })
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequestBody {
    content: String,
}
