use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;

use crate::domain::user::models::Profile;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// HttpOnly + Secure session cookie, rooted at `/` so removal matches.
pub fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_path("/");
    cookie
}

/// The user attached to a verified session.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub profile: Profile,
}

/// Middleware gating every session route.
///
/// Accepts the access token from the `accessToken` cookie or an
/// `Authorization: Bearer` header, verifies it against the access secret,
/// and loads the referenced user into the request extensions. Read-only;
/// never touches the refresh token.
pub async fn verify_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_access_token(&req)
        .ok_or_else(|| ApiError::Unauthorized("Missing access token".to_string()).into_response())?;

    let claims = state.token_issuer.verify_access(&token).map_err(|e| {
        tracing::warn!("Access token verification failed: {}", e);
        ApiError::Unauthorized("Invalid or expired access token".to_string()).into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Malformed 'sub' claim in access token: {}", e);
        ApiError::Unauthorized("Invalid access token".to_string()).into_response()
    })?;

    let profile = state.user_service.get_profile(&user_id).await.map_err(|e| {
        tracing::warn!("Session user {} could not be loaded: {}", user_id, e);
        ApiError::Unauthorized("Invalid access token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(CurrentUser {
        id: user_id,
        profile,
    });

    Ok(next.run(req).await)
}

fn extract_access_token(req: &Request) -> Option<String> {
    let jar = CookieJar::from_headers(req.headers());
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}
