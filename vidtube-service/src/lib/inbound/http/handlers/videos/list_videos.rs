use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::UserId;
use crate::domain::video::models::SortOrder;
use crate::domain::video::models::VideoListQuery;
use crate::domain::video::models::VideoSortKey;
use crate::domain::video::ports::VideoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::VideoWithOwnerData;
use crate::inbound::http::router::AppState;

pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<ListVideosParams>,
) -> Result<ApiSuccess<ListVideosResponseData>, ApiError> {
    let owner = match &params.user_id {
        Some(id) => Some(
            UserId::from_string(id).map_err(|e| ApiError::BadRequest(e.to_string()))?,
        ),
        None => None,
    };

    let query = VideoListQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).clamp(1, 100),
        search: params.query.filter(|q| !q.trim().is_empty()),
        owner,
        sort_by: VideoSortKey::parse(params.sort_by.as_deref()),
        sort_order: SortOrder::parse(params.sort_type.as_deref()),
    };

    state
        .video_service
        .list(query)
        .await
        .map_err(ApiError::from)
        .map(|page| {
            ApiSuccess::new(
                StatusCode::OK,
                "Videos fetched successfully",
                ListVideosResponseData {
                    videos: page.videos.iter().map(Into::into).collect(),
                    total: page.total,
                },
            )
        })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVideosParams {
    page: Option<i64>,
    limit: Option<i64>,
    query: Option<String>,
    user_id: Option<String>,
    sort_by: Option<String>,
    sort_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVideosResponseData {
    pub videos: Vec<VideoWithOwnerData>,
    pub total: i64,
}
