use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(comment_id): Path<String>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    let comment_id =
        CommentId::from_string(&comment_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .comment_service
        .delete(&comment_id, &current_user.id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Comment deleted successfully",
        serde_json::json!({}),
    ))
}
