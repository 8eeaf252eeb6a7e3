use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::comment::ports::CommentServicePort;
use crate::domain::video::models::VideoId;
use crate::inbound::http::handlers::comments::CommentWithOwnerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Query(params): Query<ListCommentsParams>,
) -> Result<ApiSuccess<ListCommentsResponseData>, ApiError> {
    let video_id =
        VideoId::from_string(&video_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .comment_service
        .list_for_video(
            &video_id,
            params.page.unwrap_or(1),
            params.limit.unwrap_or(10),
        )
        .await
        .map_err(ApiError::from)
        .map(|page| {
            ApiSuccess::new(
                StatusCode::OK,
                "Comments fetched successfully",
                ListCommentsResponseData {
                    comments: page.comments.iter().map(Into::into).collect(),
                    total: page.pagination.total,
                    page: page.pagination.page,
                    limit: page.pagination.limit,
                    pages: page.pagination.pages,
                },
            )
        })
}

#[derive(Debug, Deserialize)]
pub struct ListCommentsParams {
    page: Option<i64>,
    limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsResponseData {
    pub comments: Vec<CommentWithOwnerData>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}
