mod add_comment;
mod delete_comment;
mod list_comments;
mod update_comment;

use serde::Serialize;

use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentWithOwner;
use crate::inbound::http::handlers::OwnerSummaryData;
pub use add_comment::add_comment;
use chrono::DateTime;
use chrono::Utc;
pub use delete_comment::delete_comment;
pub use list_comments::list_comments;
pub use update_comment::update_comment;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentData {
    pub id: String,
    pub content: String,
    pub video: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content.clone(),
            video: comment.video.to_string(),
            owner: comment.owner.to_string(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithOwnerData {
    #[serde(flatten)]
    pub comment: CommentData,
    pub owner_details: OwnerSummaryData,
}

impl From<&CommentWithOwner> for CommentWithOwnerData {
    fn from(entry: &CommentWithOwner) -> Self {
        Self {
            comment: (&entry.comment).into(),
            owner_details: (&entry.owner).into(),
        }
    }
}
