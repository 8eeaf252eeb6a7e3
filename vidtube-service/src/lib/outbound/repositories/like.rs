use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::LikeId;
use crate::domain::like::models::LikeTarget;
use crate::domain::like::models::ToggleOutcome;
use crate::domain::like::ports::LikeRepository;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoWithOwner;
use crate::outbound::repositories::video::VideoWithOwnerRow;

pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn target_column(target: &LikeTarget) -> (&'static str, Uuid) {
    match target {
        LikeTarget::Video(id) => ("video_id", id.0),
        LikeTarget::Comment(id) => ("comment_id", id.0),
        LikeTarget::Tweet(id) => ("tweet_id", id.0),
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn toggle(
        &self,
        user: &UserId,
        target: &LikeTarget,
    ) -> Result<ToggleOutcome, LikeError> {
        let (column, target_id) = target_column(target);

        let deleted = sqlx::query(&format!(
            "DELETE FROM likes WHERE user_id = $1 AND {} = $2",
            column
        ))
        .bind(user.0)
        .bind(target_id)
        .execute(&self.pool)
        .await
        .map_err(|e| LikeError::DatabaseError(e.to_string()))?;

        if deleted.rows_affected() > 0 {
            return Ok(ToggleOutcome::Unliked);
        }

        sqlx::query(&format!(
            "INSERT INTO likes (id, user_id, {}, created_at) VALUES ($1, $2, $3, NOW())",
            column
        ))
        .bind(LikeId::new().0)
        .bind(user.0)
        .bind(target_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // A missing target surfaces as a foreign key violation.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return LikeError::TargetNotFound(target.kind(), target_id.to_string());
                }
            }
            LikeError::DatabaseError(e.to_string())
        })?;

        Ok(ToggleOutcome::Liked)
    }

    async fn liked_videos(&self, user: &UserId) -> Result<Vec<VideoWithOwner>, LikeError> {
        let rows = sqlx::query_as::<_, VideoWithOwnerRow>(
            r#"
            SELECT v.id, v.title, v.description, v.video_url, v.thumbnail_url, v.owner_id,
                   v.duration_secs, v.views, v.is_published, v.created_at,
                   u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM likes l
            JOIN videos v ON v.id = l.video_id
            JOIN users u ON u.id = v.owner_id
            WHERE l.user_id = $1
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(user.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LikeError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(VideoWithOwnerRow::into_video_with_owner)
            .collect())
    }
}
