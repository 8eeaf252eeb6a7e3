pub mod handlers;
pub mod middleware;
pub mod multipart;
pub mod router;

pub use router::create_router;
