use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateAccountCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_account(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<UpdateAccountRequestBody>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    if body.full_name.trim().is_empty() {
        return Err(ApiError::BadRequest("fullName is required".to_string()));
    }

    let email =
        EmailAddress::new(body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .update_account(
            &current_user.id,
            UpdateAccountCommand {
                full_name: body.full_name,
                email,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref profile| {
            ApiSuccess::new(
                StatusCode::OK,
                "Account details updated successfully",
                profile.into(),
            )
        })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequestBody {
    full_name: String,
    email: String,
}
