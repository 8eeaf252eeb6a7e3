use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<ChangePasswordRequestBody>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    state
        .user_service
        .change_password(
            &current_user.id,
            ChangePasswordCommand {
                old_password: body.old_password,
                new_password: body.new_password,
            },
        )
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Password changed successfully",
        serde_json::json!({}),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequestBody {
    old_password: String,
    new_password: String,
}
