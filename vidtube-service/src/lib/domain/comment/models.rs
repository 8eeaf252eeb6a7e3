use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::comment::errors::CommentIdError;
use crate::domain::ownership::Owned;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoId;

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub video: VideoId,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
}

impl Owned for Comment {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}

#[derive(Debug, Clone)]
pub struct CommentWithOwner {
    pub comment: Comment,
    pub owner: OwnerSummary,
}

/// Pagination block returned alongside a comment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

impl PageInfo {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            total,
            page,
            limit,
            pages,
        }
    }
}

#[derive(Debug)]
pub struct CommentPage {
    pub comments: Vec<CommentWithOwner>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_rounds_up() {
        let info = PageInfo::new(21, 1, 10);
        assert_eq!(info.pages, 3);

        let info = PageInfo::new(20, 1, 10);
        assert_eq!(info.pages, 2);

        let info = PageInfo::new(0, 1, 10);
        assert_eq!(info.pages, 0);
    }
}
