use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::ChannelStats;
use crate::domain::dashboard::ports::DashboardRepository;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::domain::user::models::UserId;
use crate::domain::video::models::Video;

/// Domain service implementation for the channel dashboard.
pub struct DashboardService<DR>
where
    DR: DashboardRepository,
{
    repository: Arc<DR>,
}

impl<DR> DashboardService<DR>
where
    DR: DashboardRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<DR> DashboardServicePort for DashboardService<DR>
where
    DR: DashboardRepository,
{
    async fn channel_stats(&self, channel: &UserId) -> Result<ChannelStats, DashboardError> {
        self.repository.channel_stats(channel).await
    }

    async fn channel_videos(&self, channel: &UserId) -> Result<Vec<Video>, DashboardError> {
        let videos = self.repository.channel_videos(channel).await?;

        if videos.is_empty() {
            return Err(DashboardError::NoVideos);
        }

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::video::models::VideoId;

    mock! {
        pub TestDashboardRepository {}

        #[async_trait]
        impl DashboardRepository for TestDashboardRepository {
            async fn channel_stats(&self, channel: &UserId) -> Result<ChannelStats, DashboardError>;
            async fn channel_videos(&self, channel: &UserId) -> Result<Vec<Video>, DashboardError>;
        }
    }

    #[tokio::test]
    async fn test_channel_stats_passthrough() {
        let mut repository = MockTestDashboardRepository::new();

        let stats = ChannelStats {
            total_videos: 3,
            total_views: 120,
            total_subscribers: 7,
            total_likes: 15,
        };

        repository
            .expect_channel_stats()
            .times(1)
            .returning(move |_| Ok(stats));

        let service = DashboardService::new(Arc::new(repository));

        let fetched = service.channel_stats(&UserId::new()).await.unwrap();
        assert_eq!(fetched, stats);
    }

    #[tokio::test]
    async fn test_channel_videos_empty_is_an_error() {
        let mut repository = MockTestDashboardRepository::new();

        repository
            .expect_channel_videos()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = DashboardService::new(Arc::new(repository));

        let result = service.channel_videos(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), DashboardError::NoVideos));
    }

    #[tokio::test]
    async fn test_channel_videos_newest_first_passthrough() {
        let mut repository = MockTestDashboardRepository::new();

        let owner = UserId::new();
        let video = Video {
            id: VideoId::new(),
            title: "A video".to_string(),
            description: String::new(),
            video_url: "https://media.example.com/v.mp4".to_string(),
            thumbnail_url: String::new(),
            owner,
            duration_secs: 10.0,
            views: 3,
            is_published: true,
            created_at: Utc::now(),
        };

        repository
            .expect_channel_videos()
            .times(1)
            .returning(move |_| Ok(vec![video.clone()]));

        let service = DashboardService::new(Arc::new(repository));

        let videos = service.channel_videos(&owner).await.unwrap();
        assert_eq!(videos.len(), 1);
    }
}
