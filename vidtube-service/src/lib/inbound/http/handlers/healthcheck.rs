use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;

pub async fn healthcheck() -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        "OK",
        serde_json::json!({ "status": "healthy" }),
    ))
}
