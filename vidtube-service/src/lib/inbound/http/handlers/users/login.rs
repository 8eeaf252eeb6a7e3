use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Credentials;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::middleware::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::middleware::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let identity = body
        .username
        .or(body.email)
        .filter(|identity| !identity.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Username or email is required".to_string()))?;

    let session = state
        .user_service
        .login(Credentials {
            identity,
            password: body.password,
        })
        .await?;

    let jar = jar
        .add(session_cookie(
            ACCESS_TOKEN_COOKIE,
            session.tokens.access_token.clone(),
        ))
        .add(session_cookie(
            REFRESH_TOKEN_COOKIE,
            session.tokens.refresh_token.clone(),
        ));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            "User logged in successfully",
            LoginResponseData {
                user: (&session.user).into(),
                access_token: session.tokens.access_token,
                refresh_token: session.tokens.refresh_token,
            },
        ),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequestBody {
    username: Option<String>,
    email: Option<String>,
    password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub user: ProfileData,
    pub access_token: String,
    pub refresh_token: String,
}
