use game_portal::{
    AppConfig, AppState, GameLibrary, MockUserDirectory, SessionStore, create_router,
    users::DirectoryState,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

const TEST_USERNAME: &str = "ayse";
const TEST_PASSWORD: &str = "cok-gizli-parola";

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
}

async fn spawn_app(games: GameLibrary) -> TestApp {
    let state = AppState {
        games: Arc::new(games),
        users: Arc::new(MockUserDirectory::new(TEST_USERNAME, TEST_PASSWORD)) as DirectoryState,
        sessions: Arc::new(SessionStore::new()),
        config: AppConfig::default(),
    };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

fn sample_games(count: usize) -> GameLibrary {
    let games = (0..count)
        .map(|i| json!({ "id": i, "name": format!("game-{i}") }))
        .collect();
    GameLibrary::from_records(games)
}

fn client() -> reqwest::Client {
    // Cookie store enabled so the session cookie flows across requests, the
    // way a browser would carry it.
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("client build failed")
}

async fn login(client: &reqwest::Client, app: &TestApp) {
    let response = client
        .post(format!("{}/auth/login", app.address))
        .json(&json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(response.status(), 200);
}

async fn fetch_games(client: &reqwest::Client, app: &TestApp, query: &str) -> Vec<Value> {
    let response = client
        .get(format!("{}/games{}", app.address, query))
        .send()
        .await
        .expect("games request failed");
    assert_eq!(response.status(), 200);
    response.json().await.expect("games body was not an array")
}

fn ids(games: &[Value]) -> Vec<i64> {
    games
        .iter()
        .map(|game| game["id"].as_i64().expect("id missing"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app(sample_games(0)).await;
    let response = client()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_games_require_login() {
    let app = spawn_app(sample_games(4)).await;
    let response = client()
        .get(format!("{}/games", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Unauthorized. Please log in.");
}

#[tokio::test]
async fn test_login_opens_the_gate() {
    let app = spawn_app(sample_games(4)).await;
    let client = client();
    login(&client, &app).await;

    let games = fetch_games(&client, &app, "").await;
    assert_eq!(ids(&games), vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_bad_credentials_rejected() {
    let app = spawn_app(sample_games(0)).await;
    let response = client()
        .post(format!("{}/auth/login", app.address))
        .json(&json!({ "username": TEST_USERNAME, "password": "yanlis" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_games_slicing_example() {
    // The canonical paging example: limit=2 offset=1 over four games returns
    // the records at indices 1 and 2.
    let app = spawn_app(sample_games(4)).await;
    let client = client();
    login(&client, &app).await;

    let games = fetch_games(&client, &app, "?limit=2&offset=1").await;
    assert_eq!(ids(&games), vec![1, 2]);
}

#[tokio::test]
async fn test_games_query_coercion() {
    let app = spawn_app(sample_games(4)).await;
    let client = client();
    login(&client, &app).await;

    // Non-numeric values fall back to the defaults (full length, 0).
    let games = fetch_games(&client, &app, "?limit=abc&offset=xyz").await;
    assert_eq!(ids(&games), vec![0, 1, 2, 3]);

    // Integer-prefix coercion: "2abc" reads as 2.
    let games = fetch_games(&client, &app, "?limit=2abc&offset=1").await;
    assert_eq!(ids(&games), vec![1, 2]);
}

#[tokio::test]
async fn test_games_out_of_range_clamps() {
    let app = spawn_app(sample_games(4)).await;
    let client = client();
    login(&client, &app).await;

    // Offset past the end yields an empty page, not an error.
    let games = fetch_games(&client, &app, "?offset=100").await;
    assert!(games.is_empty());

    // Limit past the end clamps to the tail.
    let games = fetch_games(&client, &app, "?limit=100&offset=3").await;
    assert_eq!(ids(&games), vec![3]);

    // Explicit zero limit is an empty page (it does not mean "all").
    let games = fetch_games(&client, &app, "?limit=0").await;
    assert!(games.is_empty());
}

#[tokio::test]
async fn test_empty_library_still_serves() {
    // A missing backing file degrades to an empty list; the endpoint keeps
    // answering 200.
    let missing = std::env::temp_dir().join(format!("no-such-games-{}.json", uuid::Uuid::new_v4()));
    let app = spawn_app(GameLibrary::from_file(&missing)).await;
    let client = client();
    login(&client, &app).await;

    let games = fetch_games(&client, &app, "").await;
    assert!(games.is_empty());
}

#[tokio::test]
async fn test_logout_closes_the_gate() {
    let app = spawn_app(sample_games(2)).await;
    let client = client();
    login(&client, &app).await;

    let games = fetch_games(&client, &app, "").await;
    assert_eq!(games.len(), 2);

    let response = client
        .post(format!("{}/auth/logout", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/games", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_me_returns_session_user() {
    let app = spawn_app(sample_games(0)).await;
    let client = client();
    login(&client, &app).await;

    let response = client
        .get(format!("{}/auth/me", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], TEST_USERNAME);
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let app = spawn_app(sample_games(0)).await;

    // First contact mints a session; the cookie must be HttpOnly and, in the
    // local test environment, must not carry the Secure attribute.
    let response = reqwest::Client::new()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();

    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("no session cookie minted")
        .to_str()
        .unwrap();

    assert!(set_cookie.starts_with("portal_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert!(!set_cookie.contains("Secure"));
}
