//! Table and session models

use super::game_type::RateUnit;
use serde::{Deserialize, Serialize};

/// Table occupancy state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
}

/// A player bound to an active session
///
/// `is_registered` and `player_id` are resolved against the player directory
/// when the session starts and stay frozen for the life of the session, even
/// if the directory changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionPlayer {
    pub name: String,
    pub is_registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

/// Active play period on an occupied table
///
/// Immutable once started: all editable choices (players, game type, rate)
/// happen before the start transition fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// 1–4 players, in seating order
    pub players: Vec<SessionPlayer>,
    pub game_type_name: String,
    pub rate_unit: RateUnit,
    /// Rate in currency units (per hour/frame/game)
    pub rate: i64,
    /// Session start (Unix millis)
    pub start_time: i64,
}

/// Snooker table entity
///
/// Invariant: `session` is `Some` iff `status == Occupied`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub id: i64,
    pub name: String,
    pub status: TableStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl Table {
    /// A fresh available table
    pub fn available(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: TableStatus::Available,
            session: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    /// Optional display name; defaults to "Table {id}"
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_table_has_no_session() {
        let table = Table::available(3, "Table 3");
        assert_eq!(table.status, TableStatus::Available);
        assert!(table.session.is_none());
        assert!(!table.is_occupied());
    }
}
