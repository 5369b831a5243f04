pub mod admin;
pub mod booking;
pub mod events;
pub mod generator;

use axum::http::HeaderMap;
use axum::Json;
use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::UserInfo;

pub const USER_ID_HEADER: &str = "x-user-id";

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn require_admin(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() || token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

/// The signed-in user, from the `X-User-Id` header set by the auth proxy.
pub fn current_user(headers: &HeaderMap) -> Option<UserInfo> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(UserInfo::user)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
