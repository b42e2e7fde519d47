//! Domain types for the daily-winner application.

use serde::{Deserialize, Serialize};

/// The two recognized contestants. Stored in SQLite as fixed lowercase
/// tokens; display names are configured separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Nico,
    Nena,
}

impl Winner {
    /// The storage token for this contestant.
    pub fn token(self) -> &'static str {
        match self {
            Winner::Nico => "nico",
            Winner::Nena => "nena",
        }
    }

    /// Parse a storage token. Case-sensitive; callers normalize first.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "nico" => Some(Winner::Nico),
            "nena" => Some(Winner::Nena),
            _ => None,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// One recorded day: the winner for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    pub date: String,
    pub winner: Winner,
    pub recorded_at: i64,
    pub source: String,
    pub note: Option<String>,
}

/// Aggregate win count for one contestant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerTally {
    pub winner: Winner,
    pub count: i64,
}

/// Elapsed time since the relationship start date, both as running totals
/// and broken down into display units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationStats {
    pub breakdown: DurationBreakdown,
    pub totals: DurationTotals,
    pub start_date: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub years: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationTotals {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Liveness probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
