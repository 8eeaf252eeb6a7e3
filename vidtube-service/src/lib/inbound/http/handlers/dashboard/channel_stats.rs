use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::dashboard::models::ChannelStats;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn channel_stats(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<ApiSuccess<ChannelStatsData>, ApiError> {
    state
        .dashboard_service
        .channel_stats(&current_user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref stats| {
            ApiSuccess::new(
                StatusCode::OK,
                "Channel stats fetched successfully",
                stats.into(),
            )
        })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatsData {
    pub total_videos: i64,
    pub total_views: i64,
    pub total_subscribers: i64,
    pub total_likes: i64,
}

impl From<&ChannelStats> for ChannelStatsData {
    fn from(stats: &ChannelStats) -> Self {
        Self {
            total_videos: stats.total_videos,
            total_views: stats.total_views,
            total_subscribers: stats.total_subscribers,
            total_likes: stats.total_likes,
        }
    }
}
