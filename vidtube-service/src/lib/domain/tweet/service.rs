use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ownership::ensure_owner;
use crate::domain::tweet::errors::TweetError;
use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetId;
use crate::domain::tweet::models::TweetWithOwner;
use crate::domain::tweet::ports::TweetRepository;
use crate::domain::tweet::ports::TweetServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for tweet operations.
pub struct TweetService<TR>
where
    TR: TweetRepository,
{
    repository: Arc<TR>,
}

impl<TR> TweetService<TR>
where
    TR: TweetRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TweetServicePort for TweetService<TR>
where
    TR: TweetRepository,
{
    async fn create(&self, owner: &UserId, content: String) -> Result<Tweet, TweetError> {
        if content.trim().is_empty() {
            return Err(TweetError::EmptyContent);
        }

        let tweet = Tweet {
            id: TweetId::new(),
            content,
            owner: *owner,
            created_at: Utc::now(),
        };

        self.repository.create(tweet).await
    }

    async fn list_for_user(&self, owner: &UserId) -> Result<Vec<TweetWithOwner>, TweetError> {
        self.repository.list_for_user(owner).await
    }

    async fn update(
        &self,
        id: &TweetId,
        actor: &UserId,
        content: String,
    ) -> Result<Tweet, TweetError> {
        if content.trim().is_empty() {
            return Err(TweetError::EmptyContent);
        }

        let mut tweet = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TweetError::NotFound(id.to_string()))?;

        ensure_owner(&tweet, actor)?;

        tweet.content = content;

        self.repository.update(tweet).await
    }

    async fn delete(&self, id: &TweetId, actor: &UserId) -> Result<(), TweetError> {
        let tweet = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TweetError::NotFound(id.to_string()))?;

        ensure_owner(&tweet, actor)?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestTweetRepository {}

        #[async_trait]
        impl TweetRepository for TestTweetRepository {
            async fn create(&self, tweet: Tweet) -> Result<Tweet, TweetError>;
            async fn find_by_id(&self, id: &TweetId) -> Result<Option<Tweet>, TweetError>;
            async fn list_for_user(&self, owner: &UserId) -> Result<Vec<TweetWithOwner>, TweetError>;
            async fn update(&self, tweet: Tweet) -> Result<Tweet, TweetError>;
            async fn delete(&self, id: &TweetId) -> Result<(), TweetError>;
        }
    }

    fn test_tweet(owner: UserId) -> Tweet {
        Tweet {
            id: TweetId::new(),
            content: "Hello world".to_string(),
            owner,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_content() {
        let repository = MockTestTweetRepository::new();
        let service = TweetService::new(Arc::new(repository));

        let result = service.create(&UserId::new(), "  ".to_string()).await;
        assert!(matches!(result.unwrap_err(), TweetError::EmptyContent));
    }

    #[tokio::test]
    async fn test_create_persists_tweet() {
        let mut repository = MockTestTweetRepository::new();

        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |tweet| tweet.owner == owner && tweet.content == "Hello world")
            .times(1)
            .returning(Ok);

        let service = TweetService::new(Arc::new(repository));

        let tweet = service
            .create(&owner, "Hello world".to_string())
            .await
            .unwrap();

        assert_eq!(tweet.content, "Hello world");
    }

    #[tokio::test]
    async fn test_update_by_non_owner_forbidden() {
        let mut repository = MockTestTweetRepository::new();

        let tweet = test_tweet(UserId::new());
        let tweet_id = tweet.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(tweet.clone())));
        repository.expect_update().times(0);

        let service = TweetService::new(Arc::new(repository));

        let result = service
            .update(&tweet_id, &UserId::new(), "Edited".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), TweetError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_delete_by_owner_succeeds() {
        let mut repository = MockTestTweetRepository::new();

        let owner = UserId::new();
        let tweet = test_tweet(owner);
        let tweet_id = tweet.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(tweet.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == tweet_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = TweetService::new(Arc::new(repository));

        service.delete(&tweet_id, &owner).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_tweet_not_found() {
        let mut repository = MockTestTweetRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TweetService::new(Arc::new(repository));

        let result = service.delete(&TweetId::new(), &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), TweetError::NotFound(_)));
    }
}
