//! API calls for the game listing.

use super::types::GameSummary;
use crate::app_lib::{api, errors::AppError};

/// Fetches a page of the game list. Omitted parameters fall back to the
/// backend defaults (full list, offset 0).
pub async fn fetch_games(
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<Vec<GameSummary>, AppError> {
    let mut query = Vec::new();
    if let Some(limit) = limit {
        query.push(format!("limit={limit}"));
    }
    if let Some(offset) = offset {
        query.push(format!("offset={offset}"));
    }

    let path = if query.is_empty() {
        "/games".to_string()
    } else {
        format!("/games?{}", query.join("&"))
    };
    api::get_json_with_credentials(&path).await
}
