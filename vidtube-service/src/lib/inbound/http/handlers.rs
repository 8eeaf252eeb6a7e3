pub mod comments;
pub mod dashboard;
pub mod healthcheck;
pub mod likes;
pub mod subscriptions;
pub mod tweets;
pub mod users;
pub mod videos;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::domain::comment::errors::CommentError;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::like::errors::LikeError;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::tweet::errors::TweetError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::OwnerSummary;
use crate::domain::user::models::Profile;
use crate::domain::video::errors::VideoError;
use crate::domain::video::models::Video;
use crate::domain::video::models::VideoWithOwner;

/// Standardized API success response.
///
/// Serializes as `{ statusCode, data, message, success: true }`.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    message: String,
    data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        Self {
            status,
            message: message.to_string(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "statusCode": self.status.as_u16(),
            "data": self.data,
            "message": self.message,
            "success": true,
        }));

        (self.status, body).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "statusCode": status.as_u16(),
            "message": message,
            "success": false,
            "errors": [],
        }));

        (status, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidOldPassword => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(id) => ApiError::NotFound(format!("User not found: {}", id)),
            UserError::ChannelNotFound(name) => {
                ApiError::NotFound(format!("Channel not found: {}", name))
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials
            | UserError::InvalidRefreshToken
            | UserError::RefreshTokenConsumed => ApiError::Unauthorized(err.to_string()),
            UserError::Media(e) => ApiError::InternalServerError(e.to_string()),
            UserError::TokenGeneration
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<VideoError> for ApiError {
    fn from(err: VideoError) -> Self {
        match err {
            VideoError::InvalidVideoId(_) | VideoError::MissingTitle => {
                ApiError::BadRequest(err.to_string())
            }
            VideoError::NotFound(id) => ApiError::NotFound(format!("Video not found: {}", id)),
            VideoError::NotOwner(_) => ApiError::Forbidden(err.to_string()),
            VideoError::Media(e) => ApiError::InternalServerError(e.to_string()),
            VideoError::DatabaseError(msg) | VideoError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::InvalidCommentId(_) | CommentError::EmptyContent => {
                ApiError::BadRequest(err.to_string())
            }
            CommentError::NotFound(id) => {
                ApiError::NotFound(format!("Comment not found: {}", id))
            }
            CommentError::NotOwner(_) => ApiError::Forbidden(err.to_string()),
            CommentError::DatabaseError(msg) | CommentError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<TweetError> for ApiError {
    fn from(err: TweetError) -> Self {
        match err {
            TweetError::InvalidTweetId(_) | TweetError::EmptyContent => {
                ApiError::BadRequest(err.to_string())
            }
            TweetError::NotFound(id) => ApiError::NotFound(format!("Tweet not found: {}", id)),
            TweetError::NotOwner(_) => ApiError::Forbidden(err.to_string()),
            TweetError::DatabaseError(msg) | TweetError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<LikeError> for ApiError {
    fn from(err: LikeError) -> Self {
        match err {
            LikeError::TargetNotFound(_, _) | LikeError::NoLikedVideos => {
                ApiError::NotFound(err.to_string())
            }
            LikeError::DatabaseError(msg) | LikeError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::SelfSubscription => ApiError::BadRequest(err.to_string()),
            SubscriptionError::ChannelNotFound(id) => {
                ApiError::NotFound(format!("Channel not found: {}", id))
            }
            SubscriptionError::DatabaseError(msg) | SubscriptionError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::NoVideos => ApiError::NotFound(err.to_string()),
            DashboardError::DatabaseError(msg) | DashboardError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

/// Sanitized user DTO shared by several handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username.clone(),
            email: profile.email.clone(),
            full_name: profile.full_name.clone(),
            avatar: profile.avatar_url.clone(),
            cover_image: profile.cover_image_url.clone(),
            created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummaryData {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub avatar: String,
}

impl From<&OwnerSummary> for OwnerSummaryData {
    fn from(owner: &OwnerSummary) -> Self {
        Self {
            id: owner.id.to_string(),
            username: owner.username.clone(),
            full_name: owner.full_name.clone(),
            avatar: owner.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub owner: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Video> for VideoData {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title.clone(),
            description: video.description.clone(),
            video_file: video.video_url.clone(),
            thumbnail: video.thumbnail_url.clone(),
            owner: video.owner.to_string(),
            duration: video.duration_secs,
            views: video.views,
            is_published: video.is_published,
            created_at: video.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithOwnerData {
    #[serde(flatten)]
    pub video: VideoData,
    pub owner_details: OwnerSummaryData,
}

impl From<&VideoWithOwner> for VideoWithOwnerData {
    fn from(entry: &VideoWithOwner) -> Self {
        Self {
            video: (&entry.video).into(),
            owner_details: (&entry.owner).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::errors::MediaError;

    #[test]
    fn test_media_failures_map_to_internal_error() {
        let err: ApiError = VideoError::Media(MediaError::UploadFailed("rejected".into())).into();
        assert!(matches!(err, ApiError::InternalServerError(_)));

        let err: ApiError = UserError::Media(MediaError::Staging("unreadable".into())).into();
        assert!(matches!(err, ApiError::InternalServerError(_)));
    }

    #[test]
    fn test_video_validation_failures_map_to_bad_request() {
        let err: ApiError = VideoError::MissingTitle.into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = VideoError::NotFound("x".into()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
