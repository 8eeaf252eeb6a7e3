use async_trait::async_trait;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::LikeTarget;
use crate::domain::like::models::ToggleOutcome;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoWithOwner;

/// Port for like domain service operations.
#[async_trait]
pub trait LikeServicePort: Send + Sync + 'static {
    /// Toggle a like on a video, comment or tweet for the given user.
    async fn toggle(&self, user: &UserId, target: LikeTarget)
        -> Result<ToggleOutcome, LikeError>;

    /// Videos the user has liked, most recent like first.
    ///
    /// # Errors
    ///
    /// Returns [`LikeError::NoLikedVideos`] when the user has not liked
    /// any video.
    async fn liked_videos(&self, user: &UserId) -> Result<Vec<VideoWithOwner>, LikeError>;
}

/// Persistence operations for likes.
#[async_trait]
pub trait LikeRepository: Send + Sync + 'static {
    /// Remove an existing (user, target) like, or insert one if absent.
    async fn toggle(&self, user: &UserId, target: &LikeTarget)
        -> Result<ToggleOutcome, LikeError>;

    async fn liked_videos(&self, user: &UserId) -> Result<Vec<VideoWithOwner>, LikeError>;
}
