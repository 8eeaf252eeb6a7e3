mod create_tweet;
mod delete_tweet;
mod list_user_tweets;
mod update_tweet;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetWithOwner;
use crate::inbound::http::handlers::OwnerSummaryData;
pub use create_tweet::create_tweet;
pub use delete_tweet::delete_tweet;
pub use list_user_tweets::list_user_tweets;
pub use update_tweet::update_tweet;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetData {
    pub id: String,
    pub content: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Tweet> for TweetData {
    fn from(tweet: &Tweet) -> Self {
        Self {
            id: tweet.id.to_string(),
            content: tweet.content.clone(),
            owner: tweet.owner.to_string(),
            created_at: tweet.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetWithOwnerData {
    #[serde(flatten)]
    pub tweet: TweetData,
    pub owner_details: OwnerSummaryData,
}

impl From<&TweetWithOwner> for TweetWithOwnerData {
    fn from(entry: &TweetWithOwner) -> Self {
        Self {
            tweet: (&entry.tweet).into(),
            owner_details: (&entry.owner).into(),
        }
    }
}
