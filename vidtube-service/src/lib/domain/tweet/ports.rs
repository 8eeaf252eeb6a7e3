use async_trait::async_trait;

use crate::domain::tweet::errors::TweetError;
use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetId;
use crate::domain::tweet::models::TweetWithOwner;
use crate::domain::user::models::UserId;

/// Port for tweet domain service operations.
#[async_trait]
pub trait TweetServicePort: Send + Sync + 'static {
    /// Create a tweet; content must be non-empty.
    async fn create(&self, owner: &UserId, content: String) -> Result<Tweet, TweetError>;

    /// All tweets by a user, newest first.
    async fn list_for_user(&self, owner: &UserId) -> Result<Vec<TweetWithOwner>, TweetError>;

    /// Update a tweet's content. Owner only.
    async fn update(
        &self,
        id: &TweetId,
        actor: &UserId,
        content: String,
    ) -> Result<Tweet, TweetError>;

    /// Delete a tweet. Owner only.
    async fn delete(&self, id: &TweetId, actor: &UserId) -> Result<(), TweetError>;
}

/// Persistence operations for tweets.
#[async_trait]
pub trait TweetRepository: Send + Sync + 'static {
    async fn create(&self, tweet: Tweet) -> Result<Tweet, TweetError>;

    async fn find_by_id(&self, id: &TweetId) -> Result<Option<Tweet>, TweetError>;

    async fn list_for_user(&self, owner: &UserId) -> Result<Vec<TweetWithOwner>, TweetError>;

    async fn update(&self, tweet: Tweet) -> Result<Tweet, TweetError>;

    async fn delete(&self, id: &TweetId) -> Result<(), TweetError>;
}
