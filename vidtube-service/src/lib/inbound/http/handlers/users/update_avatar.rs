use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::multipart::stage_field;
use crate::inbound::http::router::AppState;

pub async fn update_avatar(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let mut staged = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("avatar") {
            staged = Some(stage_field(&state.staging_dir, field).await?);
        }
    }

    let staged =
        staged.ok_or_else(|| ApiError::BadRequest("Avatar file is required".to_string()))?;

    state
        .user_service
        .update_avatar(&current_user.id, &staged)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| {
            ApiSuccess::new(StatusCode::OK, "Avatar updated successfully", profile.into())
        })
}
