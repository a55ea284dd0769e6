use std::env;

/// Hardcoded fallback for `SESSION_SECRET`. Kept for parity with the original
/// deployment; `load()` logs a warning when production falls back to it.
pub const DEFAULT_SESSION_SECRET: &str = "insecure-dev-session-secret";

/// AppConfig
///
/// Holds the application's entire configuration state. The struct is immutable
/// once loaded and shared across all services through the unified `AppState`,
/// pulled into handlers via `FromRef`.
#[derive(Clone)]
pub struct AppConfig {
    // Runtime environment marker. Controls logging format and the cookie
    // `Secure` attribute.
    pub env: Env,
    // Secret used to sign session cookies.
    pub session_secret: String,
    // Path of the JSON document backing the game library.
    pub games_path: String,
    // Path of the JSON document backing the user directory.
    pub users_path: String,
    // Listen address for the HTTP server.
    pub bind_addr: String,
}

/// Env
///
/// Defines the runtime context, used to switch between development defaults
/// (pretty logs, plain cookies) and production behavior (JSON logs, `Secure`
/// cookies).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, so tests can build application state without touching
    /// process environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            session_secret: "test-session-secret".to_string(),
            games_path: "data/games.json".to_string(),
            users_path: "data/users.json".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration
    /// at startup. Every value has a development default; none of them aborts
    /// startup. The one sharp edge is `SESSION_SECRET`: a production process
    /// missing it falls back to the built-in development secret and keeps
    /// serving (main() logs the condition once the subscriber is up).
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let session_secret = match env::var("SESSION_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            // Logging is not initialized yet at this point; main() checks for
            // the fallback and warns once the subscriber is up.
            _ => DEFAULT_SESSION_SECRET.to_string(),
        };

        Self {
            env,
            session_secret,
            games_path: env::var("GAMES_FILE").unwrap_or_else(|_| "data/games.json".to_string()),
            users_path: env::var("USERS_FILE").unwrap_or_else(|_| "data/users.json".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}
