use serde::Deserialize;

/// A game record as listed by GET /games. The backend treats records as
/// opaque JSON; the UI picks out the fields it displays and tolerates
/// missing or extra ones via defaults.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameSummary {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub players: String,
    pub description: String,
}
