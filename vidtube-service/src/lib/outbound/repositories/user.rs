use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::ChannelProfile;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::video::models::VideoWithOwner;
use crate::outbound::repositories::video::VideoWithOwnerRow;

const USER_COLUMNS: &str = "id, username, email, full_name, avatar_url, cover_image_url, \
                            password_hash, refresh_token, created_at";

#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    full_name: String,
    avatar_url: String,
    cover_image_url: Option<String>,
    password_hash: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            full_name: self.full_name,
            avatar_url: self.avatar_url,
            cover_image_url: self.cover_image_url,
            password_hash: self.password_hash,
            refresh_token: self.refresh_token,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ChannelProfileRow {
    id: Uuid,
    username: String,
    full_name: String,
    email: String,
    avatar_url: String,
    cover_image_url: Option<String>,
    subscriber_count: i64,
    subscribed_to_count: i64,
    is_subscribed: bool,
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, full_name, avatar_url, cover_image_url,
                               password_hash, refresh_token, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.full_name)
        .bind(&user.avatar_url)
        .bind(&user.cover_image_url)
        .bind(&user.password_hash)
        .bind(&user.refresh_token)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_username_key") {
                        return UserError::UsernameAlreadyExists(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("users_email_key") {
                        return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                    }
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_identity(&self, identity: &str) -> Result<Option<User>, UserError> {
        // Usernames are stored lowercased; emails compared case-insensitively.
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE username = LOWER($1) OR LOWER(email) = LOWER($1)",
            USER_COLUMNS
        ))
        .bind(identity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn set_refresh_token(
        &self,
        id: &UserId,
        refresh_token: Option<String>,
    ) -> Result<(), UserError> {
        let result = sqlx::query("UPDATE users SET refresh_token = $2 WHERE id = $1")
            .bind(id.0)
            .bind(refresh_token)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn set_password_hash(&self, id: &UserId, password_hash: &str) -> Result<(), UserError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id.0)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn update_account(
        &self,
        id: &UserId,
        full_name: &str,
        email: &str,
    ) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET full_name = $2, email = $3 WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id.0)
        .bind(full_name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(email.to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        row.ok_or(UserError::NotFound(id.to_string()))?.into_user()
    }

    async fn set_avatar_url(&self, id: &UserId, url: &str) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET avatar_url = $2 WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id.0)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.ok_or(UserError::NotFound(id.to_string()))?.into_user()
    }

    async fn set_cover_image_url(&self, id: &UserId, url: &str) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET cover_image_url = $2 WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id.0)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.ok_or(UserError::NotFound(id.to_string()))?.into_user()
    }

    async fn channel_profile(
        &self,
        username: &Username,
        viewer: &UserId,
    ) -> Result<Option<ChannelProfile>, UserError> {
        let row = sqlx::query_as::<_, ChannelProfileRow>(
            r#"
            SELECT u.id, u.username, u.full_name, u.email, u.avatar_url, u.cover_image_url,
                   (SELECT COUNT(*) FROM subscriptions s WHERE s.channel_id = u.id)
                       AS subscriber_count,
                   (SELECT COUNT(*) FROM subscriptions s WHERE s.subscriber_id = u.id)
                       AS subscribed_to_count,
                   EXISTS (SELECT 1 FROM subscriptions s
                           WHERE s.channel_id = u.id AND s.subscriber_id = $2)
                       AS is_subscribed
            FROM users u
            WHERE u.username = $1
            "#,
        )
        .bind(username.as_str())
        .bind(viewer.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| ChannelProfile {
            id: UserId(r.id),
            username: r.username,
            full_name: r.full_name,
            email: r.email,
            avatar_url: r.avatar_url,
            cover_image_url: r.cover_image_url,
            subscriber_count: r.subscriber_count,
            subscribed_to_count: r.subscribed_to_count,
            is_subscribed: r.is_subscribed,
        }))
    }

    async fn watch_history(&self, id: &UserId) -> Result<Vec<VideoWithOwner>, UserError> {
        let rows = sqlx::query_as::<_, VideoWithOwnerRow>(
            r#"
            SELECT v.id, v.title, v.description, v.video_url, v.thumbnail_url, v.owner_id,
                   v.duration_secs, v.views, v.is_published, v.created_at,
                   u.id AS o_id, u.username AS o_username, u.full_name AS o_full_name,
                   u.avatar_url AS o_avatar_url
            FROM watch_history w
            JOIN videos v ON v.id = w.video_id
            JOIN users u ON u.id = v.owner_id
            WHERE w.user_id = $1
            ORDER BY w.watched_at DESC
            "#,
        )
        .bind(id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(VideoWithOwnerRow::into_video_with_owner).collect())
    }
}

/// Shared row-to-summary conversion for joins that select the owner
/// columns with an `o_` prefix.
pub(crate) fn owner_summary(
    id: Uuid,
    username: String,
    full_name: String,
    avatar_url: String,
) -> OwnerSummary {
    OwnerSummary {
        id: UserId(id),
        username,
        full_name,
        avatar_url,
    }
}
