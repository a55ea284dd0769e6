use crate::{
    AppState,
    auth::CurrentUser,
    library,
    models::{ErrorBody, GameListQuery, LoginRequest, UserProfile},
    session::{self, SessionContext},
};
use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde_json::Value;

// --- Handler Error Type ---

/// ApiError
///
/// Handler-level error carrying a status code and a user-facing message,
/// rendered as the shared `{ "message": "..." }` envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

// --- Handlers ---

/// list_games
///
/// [Authenticated Route] Returns a page of the game library.
///
/// `limit` and `offset` are coerced with base-10 integer-prefix parsing;
/// non-numeric values fall back to the defaults (full length, 0). The page is
/// `games[offset : offset+limit]` under array-slice semantics, so out-of-range
/// values silently produce partial or empty results rather than errors.
#[utoipa::path(
    get,
    path = "/games",
    params(GameListQuery),
    responses(
        (status = 200, description = "Page of game records"),
        (status = 401, description = "Not logged in", body = ErrorBody)
    )
)]
pub async fn list_games(
    _user: CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<GameListQuery>,
) -> Json<Vec<Value>> {
    let limit = query.limit.as_deref().and_then(library::parse_int_prefix);
    let offset = query.offset.as_deref().and_then(library::parse_int_prefix);
    Json(state.games.page(limit, offset))
}

/// login
///
/// [Public Route] Validates credentials against the user directory and, on
/// success, stores the public profile into the session's `user` field --
/// which is exactly what the authorization gate checks on subsequent
/// requests. Unknown users and wrong passwords share one response.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserProfile),
        (status = 401, description = "Bad credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state
        .users
        .authenticate(&payload.username, &payload.password)
        .await
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Invalid username or password."))?;

    match serde_json::to_value(&profile) {
        Ok(user) => {
            session.set_user(user);
            Ok(Json(profile))
        }
        Err(err) => {
            tracing::error!("failed to serialize session user: {err}");
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Login failed.",
            ))
        }
    }
}

/// logout
///
/// [Public Route] Destroys the session and clears the cookie. The cookie is
/// cleared even when no session record existed, so a stale browser always
/// ends up clean.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 204, description = "Session cleared"))
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Response {
    session.destroy();

    let mut headers = HeaderMap::new();
    match session::clear_session_cookie(&state.config) {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => tracing::error!("failed to build clearing cookie: {err}"),
    }
    (StatusCode::NO_CONTENT, headers).into_response()
}

/// me
///
/// [Authenticated Route] Returns the session's `user` value verbatim. The
/// front end hydrates its auth state from this endpoint on mount.
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Session user"),
        (status = 401, description = "Not logged in", body = ErrorBody)
    )
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<Value> {
    Json(user)
}
