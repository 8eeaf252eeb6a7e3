use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::user::models::ChannelProfile;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn channel_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<ChannelProfileData>, ApiError> {
    let username = Username::new(username).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .channel_profile(&username, &current_user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref channel| {
            ApiSuccess::new(
                StatusCode::OK,
                "Channel profile fetched successfully",
                channel.into(),
            )
        })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfileData {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub subscribers_count: i64,
    pub channels_subscribed_to_count: i64,
    pub is_subscribed: bool,
}

impl From<&ChannelProfile> for ChannelProfileData {
    fn from(channel: &ChannelProfile) -> Self {
        Self {
            id: channel.id.to_string(),
            username: channel.username.clone(),
            full_name: channel.full_name.clone(),
            email: channel.email.clone(),
            avatar: channel.avatar_url.clone(),
            cover_image: channel.cover_image_url.clone(),
            subscribers_count: channel.subscriber_count,
            channels_subscribed_to_count: channel.subscribed_to_count,
            is_subscribed: channel.is_subscribed,
        }
    }
}
