use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::middleware::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::middleware::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<serde_json::Value>), ApiError> {
    state.user_service.logout(&current_user.id).await?;

    let jar = jar
        .remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            "User logged out successfully",
            serde_json::json!({}),
        ),
    ))
}
