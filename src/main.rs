use game_portal::{
    AppState,
    config::{AppConfig, DEFAULT_SESSION_SECRET, Env},
    create_router,
    library::GameLibrary,
    session::{self, SessionStore},
    users::{DirectoryState, JsonFileDirectory},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the application, responsible for
/// initializing all core components: Configuration, Logging, Game Library,
/// User Directory, Session Store, and the HTTP Server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes the RUST_LOG environment variable, falling back to sensible
    // defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "game_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    // Pretty output for humans locally; JSON output for log aggregators in
    // production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // A production process running on the built-in session secret keeps
    // serving, but the condition must be visible in the logs.
    if config.env == Env::Production && config.session_secret == DEFAULT_SESSION_SECRET {
        tracing::warn!("SESSION_SECRET is unset; using the built-in development secret");
    }

    // 4. Game Library Initialization
    // One synchronous read; a missing or malformed file degrades to an empty
    // list and the server keeps running.
    let games = Arc::new(GameLibrary::from_file(&config.games_path));
    tracing::info!(games = games.len(), path = %config.games_path, "game library loaded");

    // 5. User Directory Initialization
    let users =
        Arc::new(JsonFileDirectory::from_file(&config.users_path)) as DirectoryState;
    tracing::info!(users = users.len(), path = %config.users_path, "user directory loaded");

    // 6. Session Store + Expiry Sweeper
    let sessions = Arc::new(SessionStore::new());
    session::spawn_sweeper(
        sessions.clone(),
        Duration::from_secs(session::SWEEP_PERIOD_SECONDS),
    );

    // 7. Unified State Assembly and Server Startup
    let bind_addr = config.bind_addr.clone();
    let app_state = AppState {
        games,
        users,
        sessions,
        config,
    };
    let app = create_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: failed to bind listener. Check BIND_ADDR.");

    tracing::info!("Listening on {bind_addr}");
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    // The long-running Axum server process.
    axum::serve(listener, app).await.expect("server error");
}
