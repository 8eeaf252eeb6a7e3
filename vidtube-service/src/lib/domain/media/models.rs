/// Kind of binary object being uploaded, used by the store to pick the
/// processing pipeline (videos get a duration probe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Result of a successful upload to the media store.
#[derive(Debug, Clone)]
pub struct UploadedMedia {
    /// Public URL of the stored object
    pub url: String,
    /// Duration in seconds, present for video uploads
    pub duration_secs: Option<f64>,
}
