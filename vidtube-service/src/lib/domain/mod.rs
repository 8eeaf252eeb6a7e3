pub mod comment;
pub mod dashboard;
pub mod like;
pub mod media;
pub mod ownership;
pub mod subscription;
pub mod tweet;
pub mod user;
pub mod video;
