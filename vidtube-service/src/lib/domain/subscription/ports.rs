use async_trait::async_trait;

use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::models::SubscriptionOutcome;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::UserId;

/// Port for subscription domain service operations.
#[async_trait]
pub trait SubscriptionServicePort: Send + Sync + 'static {
    /// Subscribe the actor to a channel, or unsubscribe if already
    /// subscribed.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::SelfSubscription`] when the actor and
    /// channel are the same user.
    async fn toggle(
        &self,
        channel: &UserId,
        subscriber: &UserId,
    ) -> Result<SubscriptionOutcome, SubscriptionError>;

    /// Users subscribed to the given channel.
    async fn subscribers(&self, channel: &UserId) -> Result<Vec<OwnerSummary>, SubscriptionError>;

    /// Channels the given user is subscribed to.
    async fn subscribed_channels(
        &self,
        subscriber: &UserId,
    ) -> Result<Vec<OwnerSummary>, SubscriptionError>;
}

/// Persistence operations for subscriptions.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync + 'static {
    /// Remove an existing (channel, subscriber) row, or insert one if
    /// absent.
    async fn toggle(
        &self,
        channel: &UserId,
        subscriber: &UserId,
    ) -> Result<SubscriptionOutcome, SubscriptionError>;

    async fn subscribers(&self, channel: &UserId) -> Result<Vec<OwnerSummary>, SubscriptionError>;

    async fn subscribed_channels(
        &self,
        subscriber: &UserId,
    ) -> Result<Vec<OwnerSummary>, SubscriptionError>;
}
