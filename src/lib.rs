use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod handlers;
pub mod library;
pub mod models;
pub mod session;
pub mod users;

// Module for routing segregation (Public, Authenticated).
pub mod routes;
use auth::CurrentUser; // The resolved session user identity.
use routes::{authenticated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point
// (main.rs) and the integration tests.
pub use config::AppConfig;
pub use library::GameLibrary;
pub use session::SessionStore;
pub use users::{DirectoryState, JsonFileDirectory, MockUserDirectory};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application. It aggregates the API paths and schemas decorated with the
/// `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros; the resulting
/// JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_games, handlers::login, handlers::logout, handlers::me),
    components(schemas(models::LoginRequest, models::UserProfile, models::ErrorBody)),
    tags(
        (name = "game-portal", description = "Game Center Portal API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe container holding all application services and
/// configuration, shared across all incoming requests: the read-only game
/// library, the user directory, the session store, and the immutable config.
#[derive(Clone)]
pub struct AppState {
    /// Game library: the read-only record list loaded once at startup.
    pub games: Arc<GameLibrary>,
    /// User directory: credential lookup behind a trait object.
    pub users: DirectoryState,
    /// Session store: shared mutable state with time-boxed eviction.
    pub sessions: Arc<SessionStore>,
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations allow handlers and middleware to selectively pull
// components from the shared AppState.

impl FromRef<AppState> for Arc<GameLibrary> {
    fn from_ref(app_state: &AppState) -> Arc<GameLibrary> {
        app_state.games.clone()
    }
}

impl FromRef<AppState> for DirectoryState {
    fn from_ref(app_state: &AppState) -> DirectoryState {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<SessionStore> {
    fn from_ref(app_state: &AppState) -> Arc<SessionStore> {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces the session gate for the `authenticated_routes`.
///
/// *Mechanism*: it attempts to extract `CurrentUser` from the request. Since
/// `CurrentUser` implements `FromRequestParts`, a session whose `user` field
/// is absent or falsy rejects the request with 401 and the fixed JSON error
/// body before the handler runs. A truthy value lets the request proceed.
async fn auth_middleware(_user: CurrentUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's routing structure, applies global and scoped
/// middleware, and registers the application state. Layer order matters: the
/// session middleware wraps the whole router so the gate (a route layer on
/// the authenticated group) always finds a resolved session in the request
/// extensions.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: health probe and the login/logout pair.
        .merge(public::public_routes())
        // Authenticated Routes: protected by the session gate.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn(auth_middleware)),
        )
        // Session Resolution: runs ahead of the gate for every request.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_middleware,
        ))
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID for every request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in
                // a tracing span that carries the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns the x-request-id header
                // to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation: extracts the
/// `x-request-id` header (if present) and includes it in the structured
/// logging metadata alongside the HTTP method and URI, so every log line for
/// a single request is correlated by one ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
