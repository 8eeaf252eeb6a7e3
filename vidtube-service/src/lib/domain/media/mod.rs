pub mod errors;
pub mod models;
pub mod ports;

pub use errors::MediaError;
pub use models::MediaKind;
pub use models::UploadedMedia;
pub use ports::MediaStore;
