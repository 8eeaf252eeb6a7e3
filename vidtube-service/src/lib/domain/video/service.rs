use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::media::models::MediaKind;
use crate::domain::media::ports::MediaStore;
use crate::domain::ownership::ensure_owner;
use crate::domain::user::models::UserId;
use crate::domain::video::errors::VideoError;
use crate::domain::video::models::PublishVideoCommand;
use crate::domain::video::models::UpdateVideoCommand;
use crate::domain::video::models::Video;
use crate::domain::video::models::VideoId;
use crate::domain::video::models::VideoListQuery;
use crate::domain::video::models::VideoPage;
use crate::domain::video::models::VideoWithOwner;
use crate::domain::video::ports::VideoRepository;
use crate::domain::video::ports::VideoServicePort;

/// Domain service implementation for video operations.
pub struct VideoService<VR, MS>
where
    VR: VideoRepository,
    MS: MediaStore,
{
    repository: Arc<VR>,
    media_store: Arc<MS>,
}

impl<VR, MS> VideoService<VR, MS>
where
    VR: VideoRepository,
    MS: MediaStore,
{
    pub fn new(repository: Arc<VR>, media_store: Arc<MS>) -> Self {
        Self {
            repository,
            media_store,
        }
    }
}

#[async_trait]
impl<VR, MS> VideoServicePort for VideoService<VR, MS>
where
    VR: VideoRepository,
    MS: MediaStore,
{
    async fn list(&self, query: VideoListQuery) -> Result<VideoPage, VideoError> {
        self.repository.list(&query).await
    }

    async fn publish(
        &self,
        owner: &UserId,
        command: PublishVideoCommand,
    ) -> Result<Video, VideoError> {
        if command.title.trim().is_empty() {
            self.media_store.discard(&command.video_file).await;
            if let Some(staged) = &command.thumbnail {
                self.media_store.discard(staged).await;
            }
            return Err(VideoError::MissingTitle);
        }

        let uploaded = match self
            .media_store
            .upload(&command.video_file, MediaKind::Video)
            .await
        {
            Ok(uploaded) => uploaded,
            Err(e) => {
                if let Some(staged) = &command.thumbnail {
                    self.media_store.discard(staged).await;
                }
                return Err(e.into());
            }
        };

        let thumbnail_url = match &command.thumbnail {
            Some(staged) => self.media_store.upload(staged, MediaKind::Image).await?.url,
            None => String::new(),
        };

        let video = Video {
            id: VideoId::new(),
            title: command.title,
            description: command.description,
            video_url: uploaded.url,
            thumbnail_url,
            owner: *owner,
            duration_secs: uploaded.duration_secs.unwrap_or(0.0),
            views: 0,
            is_published: true,
            created_at: Utc::now(),
        };

        self.repository.create(video).await
    }

    async fn get(&self, id: &VideoId, viewer: &UserId) -> Result<VideoWithOwner, VideoError> {
        let video = self
            .repository
            .find_with_owner(id)
            .await?
            .ok_or(VideoError::NotFound(id.to_string()))?;

        // The watch record is best-effort; a failed bump must not break
        // the read path.
        if let Err(e) = self.repository.record_watch(viewer, id).await {
            tracing::warn!("Failed to record watch of {} by {}: {}", id, viewer, e);
        }

        Ok(video)
    }

    async fn update(
        &self,
        id: &VideoId,
        actor: &UserId,
        command: UpdateVideoCommand,
    ) -> Result<Video, VideoError> {
        let found = async {
            let video = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or(VideoError::NotFound(id.to_string()))?;
            ensure_owner(&video, actor)?;
            Ok::<Video, VideoError>(video)
        }
        .await;

        let mut video = match found {
            Ok(video) => video,
            Err(e) => {
                if let Some(staged) = &command.thumbnail {
                    self.media_store.discard(staged).await;
                }
                return Err(e);
            }
        };

        if let Some(staged) = &command.thumbnail {
            let uploaded = self.media_store.upload(staged, MediaKind::Image).await?;
            video.thumbnail_url = uploaded.url;
        }

        if let Some(title) = command.title.filter(|t| !t.trim().is_empty()) {
            video.title = title;
        }
        if let Some(description) = command.description {
            video.description = description;
        }

        self.repository.update(video).await
    }

    async fn delete(&self, id: &VideoId, actor: &UserId) -> Result<(), VideoError> {
        let video = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(VideoError::NotFound(id.to_string()))?;

        ensure_owner(&video, actor)?;

        self.repository.delete(id).await
    }

    async fn toggle_publish(&self, id: &VideoId, actor: &UserId) -> Result<Video, VideoError> {
        let mut video = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(VideoError::NotFound(id.to_string()))?;

        ensure_owner(&video, actor)?;

        video.is_published = !video.is_published;

        self.repository.update(video).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;

    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::media::errors::MediaError;
    use crate::domain::media::models::UploadedMedia;
    use crate::domain::user::models::OwnerSummary;

    mock! {
        pub TestVideoRepository {}

        #[async_trait]
        impl VideoRepository for TestVideoRepository {
            async fn create(&self, video: Video) -> Result<Video, VideoError>;
            async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>, VideoError>;
            async fn find_with_owner(&self, id: &VideoId) -> Result<Option<VideoWithOwner>, VideoError>;
            async fn list(&self, query: &VideoListQuery) -> Result<VideoPage, VideoError>;
            async fn update(&self, video: Video) -> Result<Video, VideoError>;
            async fn delete(&self, id: &VideoId) -> Result<(), VideoError>;
            async fn record_watch(&self, viewer: &UserId, id: &VideoId) -> Result<(), VideoError>;
        }
    }

    mock! {
        pub TestMediaStore {}

        #[async_trait]
        impl MediaStore for TestMediaStore {
            async fn upload(&self, local_path: &Path, kind: MediaKind) -> Result<UploadedMedia, MediaError>;
            async fn discard(&self, local_path: &Path);
        }
    }

    fn test_video(owner: UserId) -> Video {
        Video {
            id: VideoId::new(),
            title: "A video".to_string(),
            description: "About things".to_string(),
            video_url: "https://media.example.com/v.mp4".to_string(),
            thumbnail_url: String::new(),
            owner,
            duration_secs: 42.0,
            views: 0,
            is_published: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_publish_uses_upload_duration() {
        let mut repository = MockTestVideoRepository::new();
        let mut media_store = MockTestMediaStore::new();

        media_store
            .expect_upload()
            .withf(|_, kind| *kind == MediaKind::Video)
            .times(1)
            .returning(|_, _| {
                Ok(UploadedMedia {
                    url: "https://media.example.com/v.mp4".to_string(),
                    duration_secs: Some(123.5),
                })
            });

        repository
            .expect_create()
            .withf(|video| video.duration_secs == 123.5 && video.views == 0)
            .times(1)
            .returning(Ok);

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let video = service
            .publish(
                &UserId::new(),
                PublishVideoCommand {
                    title: "A video".to_string(),
                    description: String::new(),
                    video_file: PathBuf::from("/tmp/staging/v.mp4"),
                    thumbnail: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(video.video_url, "https://media.example.com/v.mp4");
    }

    #[tokio::test]
    async fn test_publish_requires_title() {
        let repository = MockTestVideoRepository::new();
        let mut media_store = MockTestMediaStore::new();

        // The rejected command's staged file is still cleaned up
        media_store
            .expect_discard()
            .withf(|path| path == Path::new("/tmp/staging/v.mp4"))
            .times(1)
            .returning(|_| ());

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let result = service
            .publish(
                &UserId::new(),
                PublishVideoCommand {
                    title: "   ".to_string(),
                    description: String::new(),
                    video_file: PathBuf::from("/tmp/staging/v.mp4"),
                    thumbnail: None,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), VideoError::MissingTitle));
    }

    #[tokio::test]
    async fn test_publish_discards_staged_thumbnail_when_video_upload_fails() {
        let mut repository = MockTestVideoRepository::new();
        let mut media_store = MockTestMediaStore::new();

        media_store
            .expect_upload()
            .withf(|_, kind| *kind == MediaKind::Video)
            .times(1)
            .returning(|_, _| Err(MediaError::UploadFailed("service unavailable".to_string())));

        media_store
            .expect_discard()
            .withf(|path| path == Path::new("/tmp/staging/t.png"))
            .times(1)
            .returning(|_| ());

        repository.expect_create().times(0);

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let result = service
            .publish(
                &UserId::new(),
                PublishVideoCommand {
                    title: "A video".to_string(),
                    description: String::new(),
                    video_file: PathBuf::from("/tmp/staging/v.mp4"),
                    thumbnail: Some(PathBuf::from("/tmp/staging/t.png")),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), VideoError::Media(_)));
    }

    #[tokio::test]
    async fn test_get_records_watch() {
        let mut repository = MockTestVideoRepository::new();
        let media_store = MockTestMediaStore::new();

        let owner = UserId::new();
        let video = test_video(owner);
        let video_id = video.id;
        let viewer = UserId::new();

        let with_owner = VideoWithOwner {
            video,
            owner: OwnerSummary {
                id: owner,
                username: "alice".to_string(),
                full_name: "Alice Example".to_string(),
                avatar_url: String::new(),
            },
        };

        repository
            .expect_find_with_owner()
            .times(1)
            .returning(move |_| Ok(Some(with_owner.clone())));

        repository
            .expect_record_watch()
            .withf(move |v, id| *v == viewer && *id == video_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let fetched = service.get(&video_id, &viewer).await.unwrap();
        assert_eq!(fetched.video.id, video_id);
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_forbidden() {
        let mut repository = MockTestVideoRepository::new();
        let media_store = MockTestMediaStore::new();

        let video = test_video(UserId::new());
        let video_id = video.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(video.clone())));
        repository.expect_delete().times(0);

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let result = service.delete(&video_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), VideoError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_delete_by_owner_succeeds() {
        let mut repository = MockTestVideoRepository::new();
        let media_store = MockTestMediaStore::new();

        let owner = UserId::new();
        let video = test_video(owner);
        let video_id = video.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(video.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == video_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        service.delete(&video_id, &owner).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_by_non_owner_forbidden() {
        let mut repository = MockTestVideoRepository::new();
        let media_store = MockTestMediaStore::new();

        let video = test_video(UserId::new());
        let video_id = video.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(video.clone())));
        repository.expect_update().times(0);

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let result = service
            .update(
                &video_id,
                &UserId::new(),
                UpdateVideoCommand {
                    title: Some("New title".to_string()),
                    description: None,
                    thumbnail: None,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), VideoError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_toggle_publish_flips_flag() {
        let mut repository = MockTestVideoRepository::new();
        let media_store = MockTestMediaStore::new();

        let owner = UserId::new();
        let video = test_video(owner);
        let video_id = video.id;
        assert!(video.is_published);

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(video.clone())));
        repository
            .expect_update()
            .withf(|video| !video.is_published)
            .times(1)
            .returning(Ok);

        let service = VideoService::new(Arc::new(repository), Arc::new(media_store));

        let updated = service.toggle_publish(&video_id, &owner).await.unwrap();
        assert!(!updated.is_published);
    }
}
