//! API calls for the session lifecycle. All requests ride on the session
//! cookie; nothing secret is stored on this side.

use super::types::UserSession;
use crate::app_lib::{api, errors::AppError};
use serde_json::json;

/// Fetches the current session, treating 401 as "not signed in".
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    api::get_optional_json_with_credentials("/auth/me").await
}

/// Opens a session. The backend answers 401 with a generic message for
/// unknown users and wrong passwords alike.
pub async fn login(username: &str, password: &str) -> Result<UserSession, AppError> {
    api::post_json_with_credentials(
        "/auth/login",
        &json!({ "username": username, "password": password }),
    )
    .await
}

/// Closes the session and clears the cookie.
pub async fn logout() -> Result<(), AppError> {
    api::post_empty_with_credentials("/auth/logout").await
}
