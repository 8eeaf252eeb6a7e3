use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::ChannelStats;
use crate::domain::user::models::UserId;
use crate::domain::video::models::Video;

/// Port for channel dashboard operations.
#[async_trait]
pub trait DashboardServicePort: Send + Sync + 'static {
    /// Aggregate stats for the channel owned by `channel`.
    async fn channel_stats(&self, channel: &UserId) -> Result<ChannelStats, DashboardError>;

    /// The channel's own videos, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoVideos`] when the channel has published
    /// nothing.
    async fn channel_videos(&self, channel: &UserId) -> Result<Vec<Video>, DashboardError>;
}

/// Read-side queries backing the dashboard.
#[async_trait]
pub trait DashboardRepository: Send + Sync + 'static {
    async fn channel_stats(&self, channel: &UserId) -> Result<ChannelStats, DashboardError>;

    async fn channel_videos(&self, channel: &UserId) -> Result<Vec<Video>, DashboardError>;
}
