use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::middleware::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::middleware::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::router::AppState;

/// Single-use refresh rotation. Every failure mode here is a 401: the
/// route never reveals whether a token was malformed, expired, or
/// already consumed by anything other than the message text.
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<RefreshRequestBody>>,
) -> Result<(CookieJar, ApiSuccess<RefreshResponseData>), ApiError> {
    let incoming = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| body.and_then(|Json(body)| body.refresh_token))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing refresh token".to_string()))?;

    let tokens = state
        .user_service
        .refresh_session(&incoming)
        .await
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let jar = jar
        .add(session_cookie(
            ACCESS_TOKEN_COOKIE,
            tokens.access_token.clone(),
        ))
        .add(session_cookie(
            REFRESH_TOKEN_COOKIE,
            tokens.refresh_token.clone(),
        ));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            "Access token refreshed",
            RefreshResponseData {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            },
        ),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequestBody {
    refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponseData {
    pub access_token: String,
    pub refresh_token: String,
}
