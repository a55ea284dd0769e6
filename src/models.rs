use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas ---

/// ErrorBody
///
/// The single error envelope used across the API: `{ "message": "..." }`.
/// The authorization gate, login failures, and handler errors all share this
/// shape so clients have one error path to parse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

/// UserRecord
///
/// Raw directory row as stored in the users document, password included.
/// Never serialized into a response; handlers only ever expose the derived
/// `UserProfile`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub display_name: String,
}

impl UserRecord {
    /// The public slice of the record, safe to store into the session and
    /// return to clients.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// UserProfile
///
/// Output schema for the authenticated user (POST /auth/login, GET /auth/me).
/// This is also the value stored into `session.user` on login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for POST /auth/login. The password is compared against the
/// directory record and dropped; it is never logged or persisted by the
/// handler.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// GameListQuery
///
/// Accepted query parameters for the game listing endpoint (GET /games).
/// Both fields are kept as raw strings: the contract coerces them with
/// base-10 integer-prefix parsing and falls back to defaults on non-numeric
/// input, rather than failing deserialization with a 400.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct GameListQuery {
    /// Maximum number of records to return. Defaults to the full list length.
    pub limit: Option<String>,
    /// Index of the first record to return. Defaults to 0.
    pub offset: Option<String>,
}
