use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentWithOwner;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::user::models::UserId;
use crate::domain::video::models::VideoId;
use crate::outbound::repositories::user::owner_summary;

#[derive(Debug, Clone, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    content: String,
    video_id: Uuid,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId(self.id),
            content: self.content,
            video: VideoId(self.video_id),
            owner: UserId(self.owner_id),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct CommentWithOwnerRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    o_id: Uuid,
    o_username: String,
    o_full_name: String,
    o_avatar_url: String,
}

impl CommentWithOwnerRow {
    fn into_comment_with_owner(self) -> CommentWithOwner {
        CommentWithOwner {
            comment: self.comment.into_comment(),
            owner: owner_summary(self.o_id, self.o_username, self.o_full_name, self.o_avatar_url),
        }
    }
}

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<CommentWithOwner, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, content, video_id, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(&comment.content)
        .bind(comment.video.0)
        .bind(comment.owner.0)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        let row = sqlx::query_as::<_, CommentWithOwnerRow>(
            r#"
            SELECT c.id, c.content, c.video_id, c.owner_id, c.created_at,
                   u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM comments c
            JOIN users u ON u.id = c.owner_id
            WHERE c.id = $1
            "#,
        )
        .bind(comment.id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(row.into_comment_with_owner())
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, video_id, owner_id, created_at FROM comments WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn list_for_video(
        &self,
        video: &VideoId,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<CommentWithOwner>, i64), CommentError> {
        let rows = sqlx::query_as::<_, CommentWithOwnerRow>(
            r#"
            SELECT c.id, c.content, c.video_id, c.owner_id, c.created_at,
                   u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM comments c
            JOIN users u ON u.id = c.owner_id
            WHERE c.video_id = $1
            ORDER BY c.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(video.0)
        .bind(limit)
        .bind((page - 1) * limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE video_id = $1")
                .bind(video.0)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok((
            rows.into_iter()
                .map(CommentWithOwnerRow::into_comment_with_owner)
                .collect(),
            total,
        ))
    }

    async fn update(&self, comment: Comment) -> Result<Comment, CommentError> {
        let result = sqlx::query("UPDATE comments SET content = $2 WHERE id = $1")
            .bind(comment.id.0)
            .bind(&comment.content)
            .execute(&self.pool)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(comment.id.to_string()));
        }

        Ok(comment)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
