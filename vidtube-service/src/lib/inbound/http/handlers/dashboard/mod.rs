mod channel_stats;
mod channel_videos;

pub use channel_stats::channel_stats;
pub use channel_videos::channel_videos;
