use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ownership::Owned;
use crate::domain::tweet::errors::TweetIdError;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::UserId;

/// Tweet unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweetId(pub Uuid);

impl TweetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, TweetIdError> {
        Uuid::parse_str(s)
            .map(TweetId)
            .map_err(|e| TweetIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TweetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A short text post on a user's channel, independent of any video.
#[derive(Debug, Clone)]
pub struct Tweet {
    pub id: TweetId,
    pub content: String,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
}

impl Owned for Tweet {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}

#[derive(Debug, Clone)]
pub struct TweetWithOwner {
    pub tweet: Tweet,
    pub owner: OwnerSummary,
}
