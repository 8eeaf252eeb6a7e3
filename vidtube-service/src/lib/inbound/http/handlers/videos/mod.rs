mod delete_video;
mod get_video;
mod list_videos;
mod publish_video;
mod toggle_publish;
mod update_video;

pub use delete_video::delete_video;
pub use get_video::get_video;
pub use list_videos::list_videos;
pub use publish_video::publish_video;
pub use toggle_publish::toggle_publish;
pub use update_video::update_video;
