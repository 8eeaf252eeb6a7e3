pub mod comment;
pub mod dashboard;
pub mod like;
pub mod subscription;
pub mod tweet;
pub mod user;
pub mod video;
