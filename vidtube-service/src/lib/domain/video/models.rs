use std::fmt;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ownership::Owned;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::UserId;
use crate::domain::video::errors::VideoIdError;

/// Video unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoId(pub Uuid);

impl VideoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a video ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, VideoIdError> {
        Uuid::parse_str(s)
            .map(VideoId)
            .map_err(|e| VideoIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Video aggregate entity.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub owner: UserId,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Owned for Video {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}

/// Video joined with its owner's summary, the shape most read paths return.
#[derive(Debug, Clone)]
pub struct VideoWithOwner {
    pub video: Video,
    pub owner: OwnerSummary,
}

/// Command to publish a new video from staged files.
#[derive(Debug)]
pub struct PublishVideoCommand {
    pub title: String,
    pub description: String,
    pub video_file: PathBuf,
    pub thumbnail: Option<PathBuf>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug)]
pub struct UpdateVideoCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<PathBuf>,
}

/// Whitelisted sort keys for video listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSortKey {
    CreatedAt,
    Views,
    Duration,
    Title,
}

impl VideoSortKey {
    /// Parse the API's camelCase sort field, defaulting to creation time.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("views") => VideoSortKey::Views,
            Some("duration") => VideoSortKey::Duration,
            Some("title") => VideoSortKey::Title,
            _ => VideoSortKey::CreatedAt,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            VideoSortKey::CreatedAt => "created_at",
            VideoSortKey::Views => "views",
            VideoSortKey::Duration => "duration_secs",
            VideoSortKey::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Listing parameters: pagination, optional title search, optional owner
/// filter, whitelisted sort.
#[derive(Debug, Clone)]
pub struct VideoListQuery {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub owner: Option<UserId>,
    pub sort_by: VideoSortKey,
    pub sort_order: SortOrder,
}

impl VideoListQuery {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// One page of videos plus the unpaginated total.
#[derive(Debug)]
pub struct VideoPage {
    pub videos: Vec<VideoWithOwner>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_whitelist() {
        assert_eq!(VideoSortKey::parse(Some("views")), VideoSortKey::Views);
        assert_eq!(VideoSortKey::parse(None), VideoSortKey::CreatedAt);
        // Arbitrary input never reaches the SQL layer as a column name
        assert_eq!(
            VideoSortKey::parse(Some("owner; DROP TABLE videos")),
            VideoSortKey::CreatedAt
        );
    }

    #[test]
    fn test_sort_order_defaults_desc() {
        assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("descending")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(None), SortOrder::Desc);
    }
}
