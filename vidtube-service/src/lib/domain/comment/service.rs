use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentPage;
use crate::domain::comment::models::CommentWithOwner;
use crate::domain::comment::models::PageInfo;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::ownership::ensure_owner;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoId;

/// Domain service implementation for comment operations.
pub struct CommentService<CR>
where
    CR: CommentRepository,
{
    repository: Arc<CR>,
}

impl<CR> CommentService<CR>
where
    CR: CommentRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CommentServicePort for CommentService<CR>
where
    CR: CommentRepository,
{
    async fn list_for_video(
        &self,
        video: &VideoId,
        page: i64,
        limit: i64,
    ) -> Result<CommentPage, CommentError> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let (comments, total) = self.repository.list_for_video(video, page, limit).await?;

        Ok(CommentPage {
            comments,
            pagination: PageInfo::new(total, page, limit),
        })
    }

    async fn add(
        &self,
        video: &VideoId,
        owner: &UserId,
        content: String,
    ) -> Result<CommentWithOwner, CommentError> {
        if content.trim().is_empty() {
            return Err(CommentError::EmptyContent);
        }

        let comment = Comment {
            id: CommentId::new(),
            content,
            video: *video,
            owner: *owner,
            created_at: Utc::now(),
        };

        self.repository.create(comment).await
    }

    async fn update(
        &self,
        id: &CommentId,
        actor: &UserId,
        content: String,
    ) -> Result<Comment, CommentError> {
        if content.trim().is_empty() {
            return Err(CommentError::EmptyContent);
        }

        let mut comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id.to_string()))?;

        ensure_owner(&comment, actor)?;

        comment.content = content;

        self.repository.update(comment).await
    }

    async fn delete(&self, id: &CommentId, actor: &UserId) -> Result<(), CommentError> {
        let comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id.to_string()))?;

        ensure_owner(&comment, actor)?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::OwnerSummary;

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: Comment) -> Result<CommentWithOwner, CommentError>;
            async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;
            async fn list_for_video(
                &self,
                video: &VideoId,
                page: i64,
                limit: i64,
            ) -> Result<(Vec<CommentWithOwner>, i64), CommentError>;
            async fn update(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
        }
    }

    fn test_comment(owner: UserId) -> Comment {
        Comment {
            id: CommentId::new(),
            content: "Nice video".to_string(),
            video: VideoId::new(),
            owner,
            created_at: Utc::now(),
        }
    }

    fn test_owner_summary(id: UserId) -> OwnerSummary {
        OwnerSummary {
            id,
            username: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            avatar_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_add_rejects_empty_content() {
        let repository = MockTestCommentRepository::new();
        let service = CommentService::new(Arc::new(repository));

        let result = service
            .add(&VideoId::new(), &UserId::new(), "   ".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), CommentError::EmptyContent));
    }

    #[tokio::test]
    async fn test_add_persists_comment() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let video = VideoId::new();

        repository
            .expect_create()
            .withf(move |comment| {
                comment.video == video && comment.owner == owner && comment.content == "First!"
            })
            .times(1)
            .returning(move |comment| {
                Ok(CommentWithOwner {
                    comment,
                    owner: test_owner_summary(owner),
                })
            });

        let service = CommentService::new(Arc::new(repository));

        let created = service
            .add(&video, &owner, "First!".to_string())
            .await
            .unwrap();

        assert_eq!(created.comment.content, "First!");
        assert_eq!(created.owner.id, owner);
    }

    #[tokio::test]
    async fn test_list_clamps_page_and_limit() {
        let mut repository = MockTestCommentRepository::new();

        repository
            .expect_list_for_video()
            .withf(|_, page, limit| *page == 1 && *limit == 100)
            .times(1)
            .returning(|_, _, _| Ok((vec![], 0)));

        let service = CommentService::new(Arc::new(repository));

        let page = service
            .list_for_video(&VideoId::new(), -3, 5000)
            .await
            .unwrap();

        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 100);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_forbidden() {
        let mut repository = MockTestCommentRepository::new();

        let comment = test_comment(UserId::new());
        let comment_id = comment.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(comment.clone())));
        repository.expect_update().times(0);

        let service = CommentService::new(Arc::new(repository));

        let result = service
            .update(&comment_id, &UserId::new(), "Edited".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), CommentError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_update_by_owner_changes_content() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let comment = test_comment(owner);
        let comment_id = comment.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(comment.clone())));
        repository
            .expect_update()
            .withf(|comment| comment.content == "Edited")
            .times(1)
            .returning(Ok);

        let service = CommentService::new(Arc::new(repository));

        let updated = service
            .update(&comment_id, &owner, "Edited".to_string())
            .await
            .unwrap();

        assert_eq!(updated.content, "Edited");
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_forbidden() {
        let mut repository = MockTestCommentRepository::new();

        let comment = test_comment(UserId::new());
        let comment_id = comment.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(comment.clone())));
        repository.expect_delete().times(0);

        let service = CommentService::new(Arc::new(repository));

        let result = service.delete(&comment_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), CommentError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_comment_not_found() {
        let mut repository = MockTestCommentRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CommentService::new(Arc::new(repository));

        let result = service.delete(&CommentId::new(), &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), CommentError::NotFound(_)));
    }
}
