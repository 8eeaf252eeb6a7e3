use std::fmt;

use uuid::Uuid;

use crate::domain::comment::models::CommentId;
use crate::domain::tweet::models::TweetId;
use crate::domain::video::models::VideoId;

/// Like unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeId(pub Uuid);

impl LikeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LikeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LikeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The entity a like points at. Exactly one target per like row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Video(VideoId),
    Comment(CommentId),
    Tweet(TweetId),
}

impl LikeTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            LikeTarget::Video(_) => "video",
            LikeTarget::Comment(_) => "comment",
            LikeTarget::Tweet(_) => "tweet",
        }
    }
}

/// Result of a like toggle: whether the target is liked after the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Liked,
    Unliked,
}

impl ToggleOutcome {
    pub fn is_liked(&self) -> bool {
        matches!(self, ToggleOutcome::Liked)
    }
}
