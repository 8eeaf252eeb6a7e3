use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::models::SubscriptionId;
use crate::domain::subscription::models::SubscriptionOutcome;
use crate::domain::subscription::ports::SubscriptionRepository;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::user::owner_summary;

#[derive(Debug, Clone, sqlx::FromRow)]
struct OwnerSummaryRow {
    o_id: Uuid,
    o_username: String,
    o_full_name: String,
    o_avatar_url: String,
}

impl OwnerSummaryRow {
    fn into_owner_summary(self) -> OwnerSummary {
        owner_summary(self.o_id, self.o_username, self.o_full_name, self.o_avatar_url)
    }
}

pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn toggle(
        &self,
        channel: &UserId,
        subscriber: &UserId,
    ) -> Result<SubscriptionOutcome, SubscriptionError> {
        let deleted = sqlx::query(
            "DELETE FROM subscriptions WHERE channel_id = $1 AND subscriber_id = $2",
        )
        .bind(channel.0)
        .bind(subscriber.0)
        .execute(&self.pool)
        .await
        .map_err(|e| SubscriptionError::DatabaseError(e.to_string()))?;

        if deleted.rows_affected() > 0 {
            return Ok(SubscriptionOutcome::Unsubscribed);
        }

        sqlx::query(
            r#"
            INSERT INTO subscriptions (id, channel_id, subscriber_id, created_at)
            VALUES ($1, $2, $3, NOW())
            "#,
        )
        .bind(SubscriptionId::new().0)
        .bind(channel.0)
        .bind(subscriber.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return SubscriptionError::ChannelNotFound(channel.to_string());
                }
            }
            SubscriptionError::DatabaseError(e.to_string())
        })?;

        Ok(SubscriptionOutcome::Subscribed)
    }

    async fn subscribers(&self, channel: &UserId) -> Result<Vec<OwnerSummary>, SubscriptionError> {
        let rows = sqlx::query_as::<_, OwnerSummaryRow>(
            r#"
            SELECT u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM subscriptions s
            JOIN users u ON u.id = s.subscriber_id
            WHERE s.channel_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(channel.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SubscriptionError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(OwnerSummaryRow::into_owner_summary).collect())
    }

    async fn subscribed_channels(
        &self,
        subscriber: &UserId,
    ) -> Result<Vec<OwnerSummary>, SubscriptionError> {
        let rows = sqlx::query_as::<_, OwnerSummaryRow>(
            r#"
            SELECT u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM subscriptions s
            JOIN users u ON u.id = s.channel_id
            WHERE s.subscriber_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(subscriber.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SubscriptionError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(OwnerSummaryRow::into_owner_summary).collect())
    }
}
