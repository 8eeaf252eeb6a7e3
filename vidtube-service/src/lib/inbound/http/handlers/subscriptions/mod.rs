mod list_subscribed_channels;
mod list_subscribers;
mod toggle_subscription;

pub use list_subscribed_channels::list_subscribed_channels;
pub use list_subscribers::list_subscribers;
pub use toggle_subscription::toggle_subscription;
