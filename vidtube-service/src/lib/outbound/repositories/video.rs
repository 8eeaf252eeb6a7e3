use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::domain::video::errors::VideoError;
use crate::domain::video::models::Video;
use crate::domain::video::models::VideoId;
use crate::domain::video::models::VideoListQuery;
use crate::domain::video::models::VideoPage;
use crate::domain::video::models::VideoWithOwner;
use crate::domain::video::ports::VideoRepository;
use crate::outbound::repositories::user::owner_summary;

#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct VideoRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub owner_id: Uuid,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl VideoRow {
    pub(crate) fn into_video(self) -> Video {
        Video {
            id: VideoId(self.id),
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            owner: UserId(self.owner_id),
            duration_secs: self.duration_secs,
            views: self.views,
            is_published: self.is_published,
            created_at: self.created_at,
        }
    }
}

/// Video columns joined with the owner columns aliased `o_*`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct VideoWithOwnerRow {
    #[sqlx(flatten)]
    pub video: VideoRow,
    pub o_id: Uuid,
    pub o_username: String,
    pub o_full_name: String,
    pub o_avatar_url: String,
}

impl VideoWithOwnerRow {
    pub(crate) fn into_video_with_owner(self) -> VideoWithOwner {
        VideoWithOwner {
            video: self.video.into_video(),
            owner: owner_summary(self.o_id, self.o_username, self.o_full_name, self.o_avatar_url),
        }
    }
}

const VIDEO_WITH_OWNER_SELECT: &str = r#"
    SELECT v.id, v.title, v.description, v.video_url, v.thumbnail_url, v.owner_id,
           v.duration_secs, v.views, v.is_published, v.created_at,
           u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
           u.avatar_url AS o_avatar_url
    FROM videos v
    JOIN users u ON u.id = v.owner_id
"#;

pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn create(&self, video: Video) -> Result<Video, VideoError> {
        sqlx::query(
            r#"
            INSERT INTO videos (id, title, description, video_url, thumbnail_url, owner_id,
                                duration_secs, views, is_published, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(video.id.0)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.video_url)
        .bind(&video.thumbnail_url)
        .bind(video.owner.0)
        .bind(video.duration_secs)
        .bind(video.views)
        .bind(video.is_published)
        .bind(video.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        Ok(video)
    }

    async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>, VideoError> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, title, description, video_url, thumbnail_url, owner_id,
                   duration_secs, views, is_published, created_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        Ok(row.map(VideoRow::into_video))
    }

    async fn find_with_owner(&self, id: &VideoId) -> Result<Option<VideoWithOwner>, VideoError> {
        let row = sqlx::query_as::<_, VideoWithOwnerRow>(&format!(
            "{} WHERE v.id = $1",
            VIDEO_WITH_OWNER_SELECT
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        Ok(row.map(VideoWithOwnerRow::into_video_with_owner))
    }

    async fn list(&self, query: &VideoListQuery) -> Result<VideoPage, VideoError> {
        // Filters are bound parameters; the ORDER BY column comes from the
        // whitelist in VideoSortKey, never from raw input.
        let filter = "WHERE v.is_published = TRUE \
                      AND ($1::text IS NULL OR v.title ILIKE '%' || $1 || '%') \
                      AND ($2::uuid IS NULL OR v.owner_id = $2)";

        let listing = format!(
            "{} {} ORDER BY v.{} {} LIMIT $3 OFFSET $4",
            VIDEO_WITH_OWNER_SELECT,
            filter,
            query.sort_by.as_column(),
            query.sort_order.as_sql(),
        );

        let rows = sqlx::query_as::<_, VideoWithOwnerRow>(&listing)
            .bind(&query.search)
            .bind(query.owner.map(|o| o.0))
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM videos v {}",
            filter
        ))
        .bind(&query.search)
        .bind(query.owner.map(|o| o.0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        Ok(VideoPage {
            videos: rows
                .into_iter()
                .map(VideoWithOwnerRow::into_video_with_owner)
                .collect(),
            total,
        })
    }

    async fn update(&self, video: Video) -> Result<Video, VideoError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $2, description = $3, thumbnail_url = $4, is_published = $5
            WHERE id = $1
            "#,
        )
        .bind(video.id.0)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(video.is_published)
        .execute(&self.pool)
        .await
        .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VideoError::NotFound(video.id.to_string()));
        }

        Ok(video)
    }

    async fn delete(&self, id: &VideoId) -> Result<(), VideoError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VideoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn record_watch(&self, viewer: &UserId, id: &VideoId) -> Result<(), VideoError> {
        sqlx::query("UPDATE videos SET views = views + 1 WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        // Re-watching moves the entry to the top of the history.
        sqlx::query(
            r#"
            INSERT INTO watch_history (user_id, video_id, watched_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id, video_id) DO UPDATE SET watched_at = NOW()
            "#,
        )
        .bind(viewer.0)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| VideoError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
