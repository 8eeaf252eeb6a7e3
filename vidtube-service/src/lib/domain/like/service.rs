use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::LikeTarget;
use crate::domain::like::models::ToggleOutcome;
use crate::domain::like::ports::LikeRepository;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoWithOwner;

/// Domain service implementation for like operations.
pub struct LikeService<LR>
where
    LR: LikeRepository,
{
    repository: Arc<LR>,
}

impl<LR> LikeService<LR>
where
    LR: LikeRepository,
{
    pub fn new(repository: Arc<LR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<LR> LikeServicePort for LikeService<LR>
where
    LR: LikeRepository,
{
    async fn toggle(
        &self,
        user: &UserId,
        target: LikeTarget,
    ) -> Result<ToggleOutcome, LikeError> {
        self.repository.toggle(user, &target).await
    }

    async fn liked_videos(&self, user: &UserId) -> Result<Vec<VideoWithOwner>, LikeError> {
        let videos = self.repository.liked_videos(user).await?;

        if videos.is_empty() {
            return Err(LikeError::NoLikedVideos);
        }

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::comment::models::CommentId;
    use crate::domain::user::models::OwnerSummary;
    use crate::domain::video::models::Video;
    use crate::domain::video::models::VideoId;

    /// Set-backed repository: toggling removes an existing like and
    /// inserts a missing one, like the DELETE-then-INSERT the real
    /// implementation runs.
    struct FakeLikeRepository {
        likes: Mutex<HashSet<(uuid::Uuid, &'static str, uuid::Uuid)>>,
    }

    impl FakeLikeRepository {
        fn new() -> Self {
            Self {
                likes: Mutex::new(HashSet::new()),
            }
        }

        fn key(user: &UserId, target: &LikeTarget) -> (uuid::Uuid, &'static str, uuid::Uuid) {
            let target_id = match target {
                LikeTarget::Video(id) => id.0,
                LikeTarget::Comment(id) => id.0,
                LikeTarget::Tweet(id) => id.0,
            };
            (user.0, target.kind(), target_id)
        }
    }

    #[async_trait]
    impl LikeRepository for FakeLikeRepository {
        async fn toggle(
            &self,
            user: &UserId,
            target: &LikeTarget,
        ) -> Result<ToggleOutcome, LikeError> {
            let key = Self::key(user, target);
            let mut likes = self.likes.lock().unwrap();

            if likes.remove(&key) {
                Ok(ToggleOutcome::Unliked)
            } else {
                likes.insert(key);
                Ok(ToggleOutcome::Liked)
            }
        }

        async fn liked_videos(&self, _user: &UserId) -> Result<Vec<VideoWithOwner>, LikeError> {
            Ok(vec![])
        }
    }

    mock! {
        pub TestLikeRepository {}

        #[async_trait]
        impl LikeRepository for TestLikeRepository {
            async fn toggle(
                &self,
                user: &UserId,
                target: &LikeTarget,
            ) -> Result<ToggleOutcome, LikeError>;
            async fn liked_videos(&self, user: &UserId) -> Result<Vec<VideoWithOwner>, LikeError>;
        }
    }

    #[tokio::test]
    async fn test_toggle_reports_repository_outcome() {
        let mut repository = MockTestLikeRepository::new();

        let user = UserId::new();
        let video = VideoId::new();

        repository
            .expect_toggle()
            .withf(move |u, t| *u == user && *t == LikeTarget::Video(video))
            .times(1)
            .returning(|_, _| Ok(ToggleOutcome::Liked));

        let service = LikeService::new(Arc::new(repository));

        let outcome = service.toggle(&user, LikeTarget::Video(video)).await.unwrap();
        assert!(outcome.is_liked());
    }

    #[tokio::test]
    async fn test_toggle_twice_returns_to_original_state() {
        let service = LikeService::new(Arc::new(FakeLikeRepository::new()));

        let user = UserId::new();
        let target = LikeTarget::Video(VideoId::new());

        assert_eq!(
            service.toggle(&user, target).await.unwrap(),
            ToggleOutcome::Liked
        );
        assert_eq!(
            service.toggle(&user, target).await.unwrap(),
            ToggleOutcome::Unliked
        );
        assert_eq!(
            service.toggle(&user, target).await.unwrap(),
            ToggleOutcome::Liked
        );
    }

    #[tokio::test]
    async fn test_toggle_tracks_each_target_independently() {
        let service = LikeService::new(Arc::new(FakeLikeRepository::new()));

        let user = UserId::new();
        let video = LikeTarget::Video(VideoId::new());
        let comment = LikeTarget::Comment(CommentId::new());

        assert_eq!(
            service.toggle(&user, video).await.unwrap(),
            ToggleOutcome::Liked
        );
        assert_eq!(
            service.toggle(&user, comment).await.unwrap(),
            ToggleOutcome::Liked
        );
        assert_eq!(
            service.toggle(&user, video).await.unwrap(),
            ToggleOutcome::Unliked
        );
        assert_eq!(
            service.toggle(&user, comment).await.unwrap(),
            ToggleOutcome::Unliked
        );
    }

    #[tokio::test]
    async fn test_liked_videos_empty_is_an_error() {
        let mut repository = MockTestLikeRepository::new();

        repository
            .expect_liked_videos()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = LikeService::new(Arc::new(repository));

        let result = service.liked_videos(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), LikeError::NoLikedVideos));
    }

    #[tokio::test]
    async fn test_liked_videos_returns_list() {
        let mut repository = MockTestLikeRepository::new();

        let owner = UserId::new();
        let liked = VideoWithOwner {
            video: Video {
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
            },
            owner: OwnerSummary {
                id: owner,
                username: "alice".to_string(),
                full_name: "Alice Example".to_string(),
                avatar_url: String::new(),
            },
        };

        repository
            .expect_liked_videos()
            .times(1)
            .returning(move |_| Ok(vec![liked.clone()]));

        let service = LikeService::new(Arc::new(repository));

        let videos = service.liked_videos(&UserId::new()).await.unwrap();
        assert_eq!(videos.len(), 1);
    }
}
