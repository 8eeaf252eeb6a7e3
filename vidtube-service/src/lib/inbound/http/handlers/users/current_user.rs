use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::middleware::CurrentUser;

pub async fn current_user(
    Extension(current_user): Extension<CurrentUser>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Current user fetched successfully",
        (&current_user.profile).into(),
    ))
}
