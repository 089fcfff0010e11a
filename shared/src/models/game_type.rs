//! Game catalog models

use serde::{Deserialize, Serialize};

/// Billing basis for a game type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateUnit {
    /// Time-based: the bill grows with elapsed time
    #[default]
    PerHour,
    /// Flat rate per frame
    PerFrame,
    /// Flat rate per game
    PerGame,
}

impl RateUnit {
    pub fn is_timed(&self) -> bool {
        matches!(self, RateUnit::PerHour)
    }
}

/// Game type entity — a named rate definition the session engine prices from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameType {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Rate in currency units, always positive
    pub rate: i64,
    pub unit: RateUnit,
    pub enabled: bool,
    /// Seeded entries, as opposed to operator-created ones
    pub is_default: bool,
}

/// Create game type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTypeCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rate: i64,
    pub unit: RateUnit,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Update game type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTypeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rate: Option<i64>,
    pub unit: Option<RateUnit>,
    pub enabled: Option<bool>,
}

fn default_enabled() -> bool {
    true
}
