mod liked_videos;
mod toggle_like;

pub use liked_videos::liked_videos;
pub use toggle_like::toggle_comment_like;
pub use toggle_like::toggle_tweet_like;
pub use toggle_like::toggle_video_like;
