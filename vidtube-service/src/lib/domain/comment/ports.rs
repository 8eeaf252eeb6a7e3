use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentPage;
use crate::domain::comment::models::CommentWithOwner;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Paginated comments for a video, newest first.
    async fn list_for_video(
        &self,
        video: &VideoId,
        page: i64,
        limit: i64,
    ) -> Result<CommentPage, CommentError>;

    /// Add a comment; content must be non-empty.
    async fn add(
        &self,
        video: &VideoId,
        owner: &UserId,
        content: String,
    ) -> Result<CommentWithOwner, CommentError>;

    /// Update a comment's content. Owner only.
    async fn update(
        &self,
        id: &CommentId,
        actor: &UserId,
        content: String,
    ) -> Result<Comment, CommentError>;

    /// Delete a comment. Owner only.
    async fn delete(&self, id: &CommentId, actor: &UserId) -> Result<(), CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: Comment) -> Result<CommentWithOwner, CommentError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    /// One page of a video's comments (newest first) plus the total count.
    async fn list_for_video(
        &self,
        video: &VideoId,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<CommentWithOwner>, i64), CommentError>;

    async fn update(&self, comment: Comment) -> Result<Comment, CommentError>;

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
}
