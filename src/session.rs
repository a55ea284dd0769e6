use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, InvalidHeaderValue, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::{
    AppState,
    config::{AppConfig, Env},
};

/// Name of the session cookie issued to browsers.
pub const SESSION_COOKIE_NAME: &str = "portal_session";

/// Session lifetime, matching the cookie `Max-Age`: 24 hours.
pub const SESSION_TTL_SECONDS: i64 = 86_400;

/// Period of the background sweep that evicts expired entries: 24 hours.
pub const SWEEP_PERIOD_SECONDS: u64 = 86_400;

type HmacSha256 = Hmac<Sha256>;

/// A single stored session. The `user` field is opaque to the server; the
/// authorization gate only ever checks it for truthiness.
struct SessionEntry {
    user: Option<Value>,
    expires_at: DateTime<Utc>,
}

/// SessionStore
///
/// In-process keyed storage associating a session id (carried by a signed
/// cookie) with request-scoped state. Entries expire 24 hours after their
/// last save; a periodic sweeper removes the leftovers so an idle process
/// does not accumulate dead sessions.
pub struct SessionStore {
    entries: RwLock<HashMap<Uuid, SessionEntry>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(SESSION_TTL_SECONDS))
    }

    /// Store with a custom entry lifetime. Tests use short (or zero) TTLs to
    /// exercise expiry without waiting.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// resolve
    ///
    /// Maps a cookie-supplied id to a live session. An absent, unknown, or
    /// expired id mints a fresh empty session (every request leaves the
    /// middleware with a usable session, initialized or not). Returns the
    /// resolved id and whether it was minted on this call.
    pub fn resolve(&self, id: Option<Uuid>) -> (Uuid, bool) {
        let now = Utc::now();
        if let Some(id) = id {
            let entries = self.entries.read().expect("session store lock poisoned");
            if let Some(entry) = entries.get(&id) {
                if entry.expires_at > now {
                    return (id, false);
                }
            }
        }

        let id = Uuid::new_v4();
        let entry = SessionEntry {
            user: None,
            expires_at: now + self.ttl,
        };
        self.entries
            .write()
            .expect("session store lock poisoned")
            .insert(id, entry);
        (id, true)
    }

    /// Returns a clone of the session's `user` value, if any.
    pub fn user(&self, id: Uuid) -> Option<Value> {
        let now = Utc::now();
        let entries = self.entries.read().expect("session store lock poisoned");
        entries
            .get(&id)
            .filter(|entry| entry.expires_at > now)
            .and_then(|entry| entry.user.clone())
    }

    /// Stores the `user` value and refreshes the entry's expiry. Inserts the
    /// entry if it disappeared between resolution and the save.
    pub fn set_user(&self, id: Uuid, user: Value) {
        let mut entries = self.entries.write().expect("session store lock poisoned");
        let expires_at = Utc::now() + self.ttl;
        entries.insert(
            id,
            SessionEntry {
                user: Some(user),
                expires_at,
            },
        );
    }

    /// Removes the session entirely (logout).
    pub fn destroy(&self, id: Uuid) {
        self.entries
            .write()
            .expect("session store lock poisoned")
            .remove(&id);
    }

    /// Evicts every expired entry, returning how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.write().expect("session store lock poisoned");
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("session store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// spawn_sweeper
///
/// Starts the background eviction task. The first tick of
/// `tokio::time::interval` fires immediately, so it is consumed before the
/// loop; sweeps then run once per `period`.
pub fn spawn_sweeper(store: Arc<SessionStore>, period: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = store.sweep();
            if removed > 0 {
                tracing::debug!(removed, "swept expired sessions");
            }
        }
    });
}

/// SessionContext
///
/// Per-request handle to the resolved session, inserted into request
/// extensions by `session_middleware`. The handle (id + store reference) is
/// stable for the lifetime of one request; handlers read and mutate session
/// state exclusively through it.
#[derive(Clone)]
pub struct SessionContext {
    id: Uuid,
    store: Arc<SessionStore>,
}

impl SessionContext {
    pub fn new(id: Uuid, store: Arc<SessionStore>) -> Self {
        Self { id, store }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> Option<Value> {
        self.store.user(self.id)
    }

    pub fn set_user(&self, user: Value) {
        self.store.set_user(self.id, user);
    }

    pub fn destroy(&self) {
        self.store.destroy(self.id);
    }
}

/// session_middleware
///
/// Applied to the whole router, ahead of the authorization gate. Resolves the
/// signed cookie to a session (minting one when needed), exposes it through
/// request extensions, and attaches the `Set-Cookie` header whenever a new
/// session was minted for this request.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_id = extract_session_id(request.headers(), &state.config.session_secret);
    let (id, minted) = state.sessions.resolve(cookie_id);
    request
        .extensions_mut()
        .insert(SessionContext::new(id, state.sessions.clone()));

    let mut response = next.run(request).await;

    if minted {
        match session_cookie(&state.config, id) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(err) => tracing::error!("failed to build session cookie: {err}"),
        }
    }
    response
}

/// session_cookie
///
/// Builds the `Set-Cookie` value for a session id. Always `HttpOnly` with
/// `SameSite=Lax` and a 24-hour `Max-Age`; the `Secure` attribute is added
/// only in production.
pub fn session_cookie(config: &AppConfig, id: Uuid) -> Result<HeaderValue, InvalidHeaderValue> {
    let value = signed_cookie_value(&config.session_secret, id);
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECONDS}"
    );
    if config.env == Env::Production {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// clear_session_cookie
///
/// Builds an expired cookie that instructs the browser to drop the session.
pub fn clear_session_cookie(config: &AppConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie =
        format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if config.env == Env::Production {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Cookie payload: `<id>.<hex hmac>`. The signature binds the id to the
/// configured secret so a tampered cookie resolves to a fresh session instead
/// of an attacker-chosen one.
pub fn signed_cookie_value(secret: &str, id: Uuid) -> String {
    let id = id.to_string();
    let signature = sign(secret, &id);
    format!("{id}.{signature}")
}

/// extract_session_id
///
/// Parses the `Cookie` header, locates the session cookie, and returns its id
/// only when the signature verifies. Anything malformed is treated as "no
/// cookie".
pub fn extract_session_id(headers: &HeaderMap, secret: &str) -> Option<Uuid> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        // Pairs without '=' are skipped, not fatal for the rest of the header.
        let Some((key, val)) = pair.trim().split_once('=') else {
            continue;
        };
        if key.trim() == SESSION_COOKIE_NAME {
            let (id, signature) = val.trim().split_once('.')?;
            if !verify(secret, id, signature) {
                return None;
            }
            return Uuid::parse_str(id).ok();
        }
    }
    None
}

fn sign(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    mac.finalize()
        .into_bytes()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

fn verify(secret: &str, message: &str, signature_hex: &str) -> bool {
    let Some(signature) = decode_hex(signature_hex) else {
        return false;
    };
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    mac.verify_slice(&signature).is_ok()
}

fn decode_hex(raw: &str) -> Option<Vec<u8>> {
    // The ASCII check keeps the byte-range slicing below on char boundaries
    // for arbitrary attacker-supplied cookie text.
    if raw.len() % 2 != 0 || !raw.is_ascii() {
        return None;
    }
    (0..raw.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&raw[i..i + 2], 16).ok())
        .collect()
}
