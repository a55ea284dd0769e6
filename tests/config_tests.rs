use game_portal::config::{AppConfig, DEFAULT_SESSION_SECRET, Env};
use serial_test::serial;

// Environment variables are process-global, so every test here is #[serial]
// and restores a clean slate before reading the config.

fn set(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) }
}

fn unset(key: &str) {
    unsafe { std::env::remove_var(key) }
}

fn clean_slate() {
    for key in [
        "APP_ENV",
        "SESSION_SECRET",
        "GAMES_FILE",
        "USERS_FILE",
        "BIND_ADDR",
    ] {
        unset(key);
    }
}

#[test]
#[serial]
fn test_defaults_are_local_development() {
    clean_slate();
    let config = AppConfig::load();

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.session_secret, DEFAULT_SESSION_SECRET);
    assert_eq!(config.games_path, "data/games.json");
    assert_eq!(config.users_path, "data/users.json");
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_production_environment_recognized() {
    clean_slate();
    set("APP_ENV", "production");
    let config = AppConfig::load();
    assert_eq!(config.env, Env::Production);

    // Anything else falls back to Local.
    set("APP_ENV", "staging");
    assert_eq!(AppConfig::load().env, Env::Local);
}

#[test]
#[serial]
fn test_session_secret_from_environment() {
    clean_slate();
    set("SESSION_SECRET", "kanarya");
    assert_eq!(AppConfig::load().session_secret, "kanarya");

    // An explicitly empty secret is treated as unset.
    set("SESSION_SECRET", "");
    assert_eq!(AppConfig::load().session_secret, DEFAULT_SESSION_SECRET);
}

#[test]
#[serial]
fn test_paths_and_bind_addr_overridable() {
    clean_slate();
    set("GAMES_FILE", "/tmp/games.json");
    set("USERS_FILE", "/tmp/users.json");
    set("BIND_ADDR", "127.0.0.1:8080");

    let config = AppConfig::load();
    assert_eq!(config.games_path, "/tmp/games.json");
    assert_eq!(config.users_path, "/tmp/users.json");
    assert_eq!(config.bind_addr, "127.0.0.1:8080");

    clean_slate();
}
