use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Authenticated Router Module
///
/// Defines the routes accessible only to a request whose session carries a
/// truthy `user` field. The gate itself is the `auth_middleware` route layer
/// applied in `create_router`; every handler here additionally takes the
/// `CurrentUser` extractor, so the check holds even if the route were ever
/// mounted without the layer.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /games?limit=...&offset=...
        // Pages through the game library in load order. Out-of-range and
        // non-numeric parameters degrade to defaults rather than erroring.
        .route("/games", get(handlers::list_games))
        // GET /auth/me
        // Returns the session's `user` value. The front end hydrates its
        // auth state from this endpoint on mount.
        .route("/auth/me", get(handlers::me))
}
