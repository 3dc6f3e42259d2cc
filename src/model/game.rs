use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display status of a game after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Pregame,
    InProgress,
    Final,
    Postponed,
    Suspended,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Pregame => "pregame",
            GameStatus::InProgress => "in_progress",
            GameStatus::Final => "final",
            GameStatus::Postponed => "postponed",
            GameStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a game, flattened for display.
#[derive(Debug, Clone, Default)]
pub struct TeamLine {
    pub city: String,
    pub name: String,
    pub abbreviation: String,
    pub wins: i64,
    pub losses: i64,
    pub score: i64,
}

/// Flat per-game record consumed by the formatting layer. Every field is
/// always populated: absent source data degrades to `0` for numerics and
/// the empty string for text, never to a missing value.
#[derive(Debug, Clone)]
pub struct NormalizedGame {
    pub id: i64,
    pub status: GameStatus,
    pub inning: i64,
    pub outs: i64,
    pub live_url: String,
    pub venue: String,
    pub away: TeamLine,
    pub home: TeamLine,
    /// Reason for an in-progress or pre-game delay, empty if none.
    pub delay: String,
    /// Reason for postponement, empty if none.
    pub postponed: String,
    /// Reason for suspension, empty if none.
    pub suspended: String,
    /// Inning count of a final game that went past nine, empty otherwise.
    pub extra_innings: String,
    /// Configured label for the current inning half, empty when unknown.
    pub top_bottom: String,
    pub start_time: DateTime<Utc>,
}
