use serde_json::Value;
use std::path::Path;

/// GameLibrary
///
/// The in-memory, read-only list of game records, loaded once at process
/// start. Records are opaque `serde_json::Value`s; the server never inspects
/// their fields, it only pages through them in load order.
pub struct GameLibrary {
    games: Vec<Value>,
}

impl GameLibrary {
    /// from_file
    ///
    /// Reads the backing JSON document synchronously. Accepted shapes:
    /// `{ "data": [...] }` or a bare array. Read and parse failures are
    /// logged and degrade to an empty library; the process keeps serving.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let games = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(document) => extract_records(document),
                Err(err) => {
                    tracing::error!(path = %path.display(), "failed to parse game library: {err}");
                    Vec::new()
                }
            },
            Err(err) => {
                tracing::error!(path = %path.display(), "failed to read game library: {err}");
                Vec::new()
            }
        };
        Self { games }
    }

    /// Library built from already-materialized records. Test seam.
    pub fn from_records(games: Vec<Value>) -> Self {
        Self { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// page
    ///
    /// Returns `games[offset : offset+limit]` under ECMAScript
    /// `Array.prototype.slice` semantics: negative indices count from the
    /// end of the list, out-of-range indices clamp silently, and a crossed
    /// range yields an empty page. Missing parameters default to
    /// `offset = 0` and `limit = len`.
    pub fn page(&self, limit: Option<i64>, offset: Option<i64>) -> Vec<Value> {
        let len = self.games.len() as i64;
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(len);

        let start = normalize_slice_index(offset, len);
        let end = normalize_slice_index(offset.saturating_add(limit), len);
        if start < end {
            self.games[start..end].to_vec()
        } else {
            Vec::new()
        }
    }
}

/// extract_records
///
/// Shape tolerance shared by the game library and the user directory:
/// prefer a top-level `data` array, fall back to a bare array, and treat
/// anything else as an empty document.
pub(crate) fn extract_records(document: Value) -> Vec<Value> {
    match document {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(records)) => records,
            _ => {
                tracing::warn!("records document is an object without a \"data\" array");
                Vec::new()
            }
        },
        Value::Array(records) => records,
        _ => {
            tracing::warn!("records document is neither an object nor an array");
            Vec::new()
        }
    }
}

/// parse_int_prefix
///
/// Base-10 integer-prefix coercion for query parameters, matching the source
/// contract: `"12"` → 12, `" 34abc"` → 34, `"-7"` → -7, `"abc"`/`""` → None.
/// An overflowing digit run saturates rather than erroring.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn normalize_slice_index(index: i64, len: i64) -> usize {
    let resolved = if index < 0 { len + index } else { index };
    resolved.clamp(0, len) as usize
}
