use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any
/// client. These are the gateway functions: the monitoring probe and the
/// session open/close pair. Everything content-bearing lives behind the gate
/// in `authenticated_routes`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load
        // balancer checks. Returns "ok" immediately.
        .route("/health", get(|| async { "ok" }))
        // POST /auth/login
        // Validates credentials against the user directory and stores the
        // public profile into the session's `user` field on success.
        .route("/auth/login", post(handlers::login))
        // POST /auth/logout
        // Destroys the session and clears the cookie. Deliberately public:
        // a client with a stale or empty session must still be able to reset.
        .route("/auth/logout", post(handlers::logout))
}
