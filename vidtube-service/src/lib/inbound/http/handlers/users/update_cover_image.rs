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

pub async fn update_cover_image(
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
        if field.name() == Some("coverImage") {
            staged = Some(stage_field(&state.staging_dir, field).await?);
        }
    }

    let staged =
        staged.ok_or_else(|| ApiError::BadRequest("Cover image file is required".to_string()))?;

    state
        .user_service
        .update_cover_image(&current_user.id, &staged)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| {
            ApiSuccess::new(
                StatusCode::OK,
                "Cover image updated successfully",
                profile.into(),
            )
        })
}
