use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::domain::video::errors::VideoError;
use crate::domain::video::models::PublishVideoCommand;
use crate::domain::video::models::UpdateVideoCommand;
use crate::domain::video::models::Video;
use crate::domain::video::models::VideoId;
use crate::domain::video::models::VideoListQuery;
use crate::domain::video::models::VideoPage;
use crate::domain::video::models::VideoWithOwner;

/// Port for video domain service operations.
#[async_trait]
pub trait VideoServicePort: Send + Sync + 'static {
    /// List videos with pagination, search, owner filter, and sorting.
    async fn list(&self, query: VideoListQuery) -> Result<VideoPage, VideoError>;

    /// Upload the staged files and persist the video.
    ///
    /// # Errors
    /// * `MissingTitle` - Empty title
    /// * `Media` - Video or thumbnail upload failed
    async fn publish(
        &self,
        owner: &UserId,
        command: PublishVideoCommand,
    ) -> Result<Video, VideoError>;

    /// Fetch a video with its owner summary, recording the watch for the
    /// viewer (view count + watch history).
    ///
    /// # Errors
    /// * `NotFound` - Video does not exist
    async fn get(&self, id: &VideoId, viewer: &UserId) -> Result<VideoWithOwner, VideoError>;

    /// Update title/description/thumbnail. Owner only.
    ///
    /// # Errors
    /// * `NotFound` - Video does not exist
    /// * `NotOwner` - Actor does not own the video
    async fn update(
        &self,
        id: &VideoId,
        actor: &UserId,
        command: UpdateVideoCommand,
    ) -> Result<Video, VideoError>;

    /// Delete a video. Owner only.
    ///
    /// # Errors
    /// * `NotFound` - Video does not exist
    /// * `NotOwner` - Actor does not own the video
    async fn delete(&self, id: &VideoId, actor: &UserId) -> Result<(), VideoError>;

    /// Flip the published flag. Owner only.
    ///
    /// # Errors
    /// * `NotFound` - Video does not exist
    /// * `NotOwner` - Actor does not own the video
    async fn toggle_publish(&self, id: &VideoId, actor: &UserId) -> Result<Video, VideoError>;
}

/// Persistence operations for the video aggregate.
#[async_trait]
pub trait VideoRepository: Send + Sync + 'static {
    async fn create(&self, video: Video) -> Result<Video, VideoError>;

    async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>, VideoError>;

    async fn find_with_owner(&self, id: &VideoId) -> Result<Option<VideoWithOwner>, VideoError>;

    async fn list(&self, query: &VideoListQuery) -> Result<VideoPage, VideoError>;

    /// Update mutable fields (title, description, thumbnail, published
    /// flag), returning the updated row.
    async fn update(&self, video: Video) -> Result<Video, VideoError>;

    async fn delete(&self, id: &VideoId) -> Result<(), VideoError>;

    /// Record a watch: bump the view count and append to the viewer's
    /// watch history.
    async fn record_watch(&self, viewer: &UserId, id: &VideoId) -> Result<(), VideoError>;
}
