use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use chrono::Duration;
use game_portal::{
    AppConfig, SessionStore,
    config::Env,
    session::{clear_session_cookie, extract_session_id, session_cookie, signed_cookie_value},
};
use serde_json::json;
use uuid::Uuid;

// --- Store Behavior ---

#[test]
fn test_resolve_mints_and_reuses() {
    let store = SessionStore::new();

    let (id, minted) = store.resolve(None);
    assert!(minted);
    assert_eq!(store.len(), 1);

    // A known, live id resolves to itself without minting.
    let (resolved, minted) = store.resolve(Some(id));
    assert!(!minted);
    assert_eq!(resolved, id);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_unknown_id_mints_fresh_session() {
    let store = SessionStore::new();
    let (id, minted) = store.resolve(Some(Uuid::new_v4()));
    assert!(minted);
    assert!(store.user(id).is_none());
}

#[test]
fn test_expired_session_treated_as_missing() {
    // Zero TTL: every entry is expired the moment it is created.
    let store = SessionStore::with_ttl(Duration::seconds(0));
    let (id, _) = store.resolve(None);

    let (resolved, minted) = store.resolve(Some(id));
    assert!(minted);
    assert_ne!(resolved, id);
    assert!(store.user(id).is_none());
}

#[test]
fn test_user_roundtrip_and_destroy() {
    let store = SessionStore::new();
    let (id, _) = store.resolve(None);
    assert!(store.user(id).is_none());

    store.set_user(id, json!({ "username": "ayse" }));
    assert_eq!(store.user(id), Some(json!({ "username": "ayse" })));

    store.destroy(id);
    assert!(store.user(id).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_sweep_removes_only_expired_entries() {
    let fresh = SessionStore::new();
    fresh.resolve(None);
    fresh.resolve(None);
    assert_eq!(fresh.sweep(), 0);
    assert_eq!(fresh.len(), 2);

    let expired = SessionStore::with_ttl(Duration::seconds(0));
    expired.resolve(None);
    expired.resolve(None);
    assert_eq!(expired.sweep(), 2);
    assert!(expired.is_empty());
}

// --- Cookie Behavior ---

fn production_config() -> AppConfig {
    AppConfig {
        env: Env::Production,
        ..AppConfig::default()
    }
}

#[test]
fn test_cookie_attributes_local() {
    let config = AppConfig::default();
    let cookie = session_cookie(&config, Uuid::new_v4()).unwrap();
    let cookie = cookie.to_str().unwrap();

    assert!(cookie.starts_with("portal_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=86400"));
    // Local deployments never mark the cookie Secure.
    assert!(!cookie.contains("Secure"));
}

#[test]
fn test_cookie_attributes_production() {
    let cookie = session_cookie(&production_config(), Uuid::new_v4()).unwrap();
    assert!(cookie.to_str().unwrap().contains("Secure"));

    let clearing = clear_session_cookie(&production_config()).unwrap();
    let clearing = clearing.to_str().unwrap();
    assert!(clearing.contains("Max-Age=0"));
    assert!(clearing.contains("Secure"));
}

fn headers_with_cookie(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_signed_cookie_roundtrip() {
    let secret = "test-session-secret";
    let id = Uuid::new_v4();
    let headers = headers_with_cookie(&format!(
        "portal_session={}",
        signed_cookie_value(secret, id)
    ));

    assert_eq!(extract_session_id(&headers, secret), Some(id));
}

#[test]
fn test_cookie_found_among_other_cookies() {
    let secret = "test-session-secret";
    let id = Uuid::new_v4();
    let headers = headers_with_cookie(&format!(
        "theme=dark; portal_session={}; lang=tr",
        signed_cookie_value(secret, id)
    ));

    assert_eq!(extract_session_id(&headers, secret), Some(id));
}

#[test]
fn test_tampered_cookie_rejected() {
    let secret = "test-session-secret";
    let genuine = signed_cookie_value(secret, Uuid::new_v4());

    // Swap the id while keeping the old signature.
    let signature = genuine.split_once('.').unwrap().1;
    let forged = format!("portal_session={}.{}", Uuid::new_v4(), signature);

    assert_eq!(extract_session_id(&headers_with_cookie(&forged), secret), None);
}

#[test]
fn test_wrong_secret_rejected() {
    let id = Uuid::new_v4();
    let headers = headers_with_cookie(&format!(
        "portal_session={}",
        signed_cookie_value("secret-a", id)
    ));

    assert_eq!(extract_session_id(&headers, "secret-b"), None);
}

#[test]
fn test_malformed_cookie_rejected() {
    let secret = "test-session-secret";
    for raw in [
        "portal_session=",
        "portal_session=not-even-signed",
        "portal_session=abc.def",
        "other=cookie",
    ] {
        assert_eq!(
            extract_session_id(&headers_with_cookie(raw), secret),
            None,
            "cookie {raw:?} should not resolve"
        );
    }
}
