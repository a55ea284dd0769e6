use serde::{Deserialize, Serialize};

/// The session user as returned by POST /auth/login and GET /auth/me. The id
/// is kept as an opaque string; the UI never interprets it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub username: String,
    pub display_name: String,
}
