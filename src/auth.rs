use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{models::ErrorBody, session::SessionContext};

/// Fixed body of every gate rejection. Clients key their redirect-to-login
/// behavior off this exact message.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Please log in.";

/// AuthRejection
///
/// Rejection produced by the `CurrentUser` extractor: HTTP 401 with the fixed
/// JSON envelope `{ "message": "Unauthorized. Please log in." }`.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: UNAUTHORIZED_MESSAGE.to_string(),
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// CurrentUser
///
/// The resolved identity of an authenticated request: the session's `user`
/// value, known to be truthy. The server never interprets the value beyond
/// that check.
///
/// Implements `FromRequestParts`, so it doubles as the gate itself: listing it
/// as a handler argument (or in the `auth_middleware` signature) rejects the
/// request with 401 before any business logic runs. The session is read from
/// request extensions, which `session_middleware` populates for every request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Value);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<SessionContext>()
            .ok_or(AuthRejection)?;
        let user = session.user().ok_or(AuthRejection)?;
        if is_truthy(&user) {
            Ok(CurrentUser(user))
        } else {
            Err(AuthRejection)
        }
    }
}

/// is_truthy
///
/// Source-faithful truthiness for the session's `user` field: `null`,
/// `false`, `0` and `""` gate the request out; every other value passes.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
