use std::path::PathBuf;

use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::multipart::discard_staged;
use crate::inbound::http::multipart::stage_field;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let mut full_name = None;
    let mut username = None;
    let mut email = None;
    let mut password = None;
    let mut avatar: Option<PathBuf> = None;
    let mut cover_image: Option<PathBuf> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("fullName") => full_name = Some(read_text(field).await?),
            Some("username") => username = Some(read_text(field).await?),
            Some("email") => email = Some(read_text(field).await?),
            Some("password") => password = Some(read_text(field).await?),
            Some("avatar") => avatar = Some(stage_field(&state.staging_dir, field).await?),
            Some("coverImage") => {
                cover_image = Some(stage_field(&state.staging_dir, field).await?);
            }
            _ => {}
        }
    }

    let command = match build_command(full_name, username, email, password, &avatar, &cover_image) {
        Ok(command) => command,
        Err(e) => {
            // Staged files from an invalid request would otherwise leak.
            if let Some(path) = &avatar {
                discard_staged(path).await;
            }
            if let Some(path) = &cover_image {
                discard_staged(path).await;
            }
            return Err(e);
        }
    };

    state
        .user_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "User registered successfully",
                profile.into(),
            )
        })
}

fn build_command(
    full_name: Option<String>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    avatar: &Option<PathBuf>,
    cover_image: &Option<PathBuf>,
) -> Result<RegisterUserCommand, ApiError> {
    let full_name = require(full_name, "fullName")?;
    let username = Username::new(require(username, "username")?)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let email = EmailAddress::new(require(email, "email")?)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let password = require(password, "password")?;

    let avatar = avatar
        .clone()
        .ok_or_else(|| ApiError::BadRequest("Avatar file is required".to_string()))?;

    Ok(RegisterUserCommand {
        full_name,
        username,
        email,
        password,
        avatar,
        cover_image: cover_image.clone(),
    })
}

fn require(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(format!("{} is required", name))),
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart field: {}", e)))
}
