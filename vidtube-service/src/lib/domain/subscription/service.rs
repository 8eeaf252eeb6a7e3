use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::models::SubscriptionOutcome;
use crate::domain::subscription::ports::SubscriptionRepository;
use crate::domain::subscription::ports::SubscriptionServicePort;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::UserId;

/// Domain service implementation for subscription operations.
pub struct SubscriptionService<SR>
where
    SR: SubscriptionRepository,
{
    repository: Arc<SR>,
}

impl<SR> SubscriptionService<SR>
where
    SR: SubscriptionRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SubscriptionServicePort for SubscriptionService<SR>
where
    SR: SubscriptionRepository,
{
    async fn toggle(
        &self,
        channel: &UserId,
        subscriber: &UserId,
    ) -> Result<SubscriptionOutcome, SubscriptionError> {
        if channel == subscriber {
            return Err(SubscriptionError::SelfSubscription);
        }

        self.repository.toggle(channel, subscriber).await
    }

    async fn subscribers(&self, channel: &UserId) -> Result<Vec<OwnerSummary>, SubscriptionError> {
        self.repository.subscribers(channel).await
    }

    async fn subscribed_channels(
        &self,
        subscriber: &UserId,
    ) -> Result<Vec<OwnerSummary>, SubscriptionError> {
        self.repository.subscribed_channels(subscriber).await
    }
}
