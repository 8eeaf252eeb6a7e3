use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::tweet::errors::TweetError;
use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetId;
use crate::domain::tweet::models::TweetWithOwner;
use crate::domain::tweet::ports::TweetRepository;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::user::owner_summary;

#[derive(Debug, Clone, sqlx::FromRow)]
struct TweetRow {
    id: Uuid,
    content: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TweetRow {
    fn into_tweet(self) -> Tweet {
        Tweet {
            id: TweetId(self.id),
            content: self.content,
            owner: UserId(self.owner_id),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct TweetWithOwnerRow {
    #[sqlx(flatten)]
    tweet: TweetRow,
    o_id: Uuid,
    o_username: String,
    o_full_name: String,
    o_avatar_url: String,
}

pub struct PostgresTweetRepository {
    pool: PgPool,
}

impl PostgresTweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PostgresTweetRepository {
    async fn create(&self, tweet: Tweet) -> Result<Tweet, TweetError> {
        sqlx::query(
            "INSERT INTO tweets (id, content, owner_id, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(tweet.id.0)
        .bind(&tweet.content)
        .bind(tweet.owner.0)
        .bind(tweet.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        Ok(tweet)
    }

    async fn find_by_id(&self, id: &TweetId) -> Result<Option<Tweet>, TweetError> {
        let row = sqlx::query_as::<_, TweetRow>(
            "SELECT id, content, owner_id, created_at FROM tweets WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        Ok(row.map(TweetRow::into_tweet))
    }

    async fn list_for_user(&self, owner: &UserId) -> Result<Vec<TweetWithOwner>, TweetError> {
        let rows = sqlx::query_as::<_, TweetWithOwnerRow>(
            r#"
            SELECT t.id, t.content, t.owner_id, t.created_at,
                   u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM tweets t
            JOIN users u ON u.id = t.owner_id
            WHERE t.owner_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| TweetWithOwner {
                tweet: row.tweet.into_tweet(),
                owner: owner_summary(row.o_id, row.o_username, row.o_full_name, row.o_avatar_url),
            })
            .collect())
    }

    async fn update(&self, tweet: Tweet) -> Result<Tweet, TweetError> {
        let result = sqlx::query("UPDATE tweets SET content = $2 WHERE id = $1")
            .bind(tweet.id.0)
            .bind(&tweet.content)
            .execute(&self.pool)
            .await
            .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TweetError::NotFound(tweet.id.to_string()));
        }

        Ok(tweet)
    }

    async fn delete(&self, id: &TweetId) -> Result<(), TweetError> {
        let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TweetError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
