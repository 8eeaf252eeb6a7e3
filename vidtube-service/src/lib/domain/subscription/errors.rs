use thiserror::Error;

/// Top-level error for subscription operations
#[derive(Debug, Clone, Error)]
pub enum SubscriptionError {
    #[error("You cannot subscribe to your own channel")]
    SelfSubscription,

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
