use game_portal::library::{GameLibrary, parse_int_prefix};
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

// --- Helpers ---

fn sample(count: usize) -> GameLibrary {
    let games = (0..count).map(|i| json!({ "id": i })).collect();
    GameLibrary::from_records(games)
}

fn ids(games: &[Value]) -> Vec<i64> {
    games.iter().map(|game| game["id"].as_i64().unwrap()).collect()
}

/// Writes a scratch document under the OS temp dir; removed on drop.
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn with_contents(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("game-portal-{}.json", Uuid::new_v4()));
        fs::write(&path, contents).expect("failed to write scratch file");
        Self { path }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

// --- Loading Behavior ---

#[test]
fn test_load_data_wrapper_shape() {
    let file = ScratchFile::with_contents(r#"{ "data": [{ "id": 0 }, { "id": 1 }] }"#);
    let library = GameLibrary::from_file(&file.path);
    assert_eq!(library.len(), 2);
}

#[test]
fn test_load_bare_array_shape() {
    let file = ScratchFile::with_contents(r#"[{ "id": 0 }, { "id": 1 }, { "id": 2 }]"#);
    let library = GameLibrary::from_file(&file.path);
    assert_eq!(library.len(), 3);
}

#[test]
fn test_load_object_without_data_is_empty() {
    let file = ScratchFile::with_contents(r#"{ "games": [{ "id": 0 }] }"#);
    let library = GameLibrary::from_file(&file.path);
    assert!(library.is_empty());
}

#[test]
fn test_load_malformed_document_is_empty() {
    let file = ScratchFile::with_contents("{ not json at all");
    let library = GameLibrary::from_file(&file.path);
    assert!(library.is_empty());
}

#[test]
fn test_load_missing_file_is_empty() {
    let path = std::env::temp_dir().join(format!("absent-{}.json", Uuid::new_v4()));
    let library = GameLibrary::from_file(&path);
    assert!(library.is_empty());
}

// --- Paging Behavior ---

#[test]
fn test_page_defaults_return_everything() {
    let library = sample(4);
    assert_eq!(ids(&library.page(None, None)), vec![0, 1, 2, 3]);
}

#[test]
fn test_page_canonical_example() {
    // limit=2 offset=1 over four games -> indices 1 and 2.
    let library = sample(4);
    assert_eq!(ids(&library.page(Some(2), Some(1))), vec![1, 2]);
}

#[test]
fn test_page_clamps_out_of_range() {
    let library = sample(4);
    assert!(library.page(Some(2), Some(100)).is_empty());
    assert_eq!(ids(&library.page(Some(100), Some(3))), vec![3]);
    assert!(library.page(Some(0), None).is_empty());
}

#[test]
fn test_page_negative_indices_follow_slice_semantics() {
    let library = sample(4);

    // offset=-3, limit=5: slice(-3, 2) -> index 1.
    assert_eq!(ids(&library.page(Some(5), Some(-3))), vec![1]);

    // offset=-1 with a default limit: slice(-1, 3) -> empty, the end lands
    // before the start.
    assert!(library.page(None, Some(-1)).is_empty());

    // A limit large enough to pass the end clamps to the tail.
    assert_eq!(ids(&library.page(Some(100), Some(-2))), vec![2, 3]);
}

#[test]
fn test_page_on_empty_library() {
    let library = sample(0);
    assert!(library.page(None, None).is_empty());
    assert!(library.page(Some(5), Some(2)).is_empty());
}

// --- Query Coercion ---

#[test]
fn test_parse_int_prefix_plain_numbers() {
    assert_eq!(parse_int_prefix("12"), Some(12));
    assert_eq!(parse_int_prefix("0"), Some(0));
    assert_eq!(parse_int_prefix("-7"), Some(-7));
    assert_eq!(parse_int_prefix("+5"), Some(5));
    assert_eq!(parse_int_prefix("  34"), Some(34));
}

#[test]
fn test_parse_int_prefix_takes_leading_digits() {
    assert_eq!(parse_int_prefix("12abc"), Some(12));
    assert_eq!(parse_int_prefix("7.9"), Some(7));
    assert_eq!(parse_int_prefix("-3x"), Some(-3));
}

#[test]
fn test_parse_int_prefix_rejects_non_numeric() {
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix("."), None);
    assert_eq!(parse_int_prefix("x12"), None);
}

#[test]
fn test_parse_int_prefix_saturates_on_overflow() {
    assert_eq!(
        parse_int_prefix("999999999999999999999999"),
        Some(i64::MAX)
    );
}
