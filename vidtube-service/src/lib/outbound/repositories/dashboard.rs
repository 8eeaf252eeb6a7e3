use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::ChannelStats;
use crate::domain::dashboard::ports::DashboardRepository;
use crate::domain::user::models::UserId;
use crate::domain::video::models::Video;
use crate::outbound::repositories::video::VideoRow;

#[derive(Debug, Clone, sqlx::FromRow)]
struct ChannelStatsRow {
    total_videos: i64,
    total_views: i64,
    total_subscribers: i64,
    total_likes: i64,
}

pub struct PostgresDashboardRepository {
    pool: PgPool,
}

impl PostgresDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PostgresDashboardRepository {
    async fn channel_stats(&self, channel: &UserId) -> Result<ChannelStats, DashboardError> {
        let row = sqlx::query_as::<_, ChannelStatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM videos v WHERE v.owner_id = $1) AS total_videos,
                (SELECT COALESCE(SUM(v.views), 0)::bigint FROM videos v WHERE v.owner_id = $1)
                    AS total_views,
                (SELECT COUNT(*) FROM subscriptions s WHERE s.channel_id = $1)
                    AS total_subscribers,
                (SELECT COUNT(*) FROM likes l
                 JOIN videos v ON v.id = l.video_id
                 WHERE v.owner_id = $1) AS total_likes
            "#,
        )
        .bind(channel.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DashboardError::DatabaseError(e.to_string()))?;

        Ok(ChannelStats {
            total_videos: row.total_videos,
            total_views: row.total_views,
            total_subscribers: row.total_subscribers,
            total_likes: row.total_likes,
        })
    }

    async fn channel_videos(&self, channel: &UserId) -> Result<Vec<Video>, DashboardError> {
        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, title, description, video_url, thumbnail_url, owner_id,
                   duration_secs, views, is_published, created_at
            FROM videos
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(channel.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DashboardError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(VideoRow::into_video).collect())
    }
}
