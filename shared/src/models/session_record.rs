//! Completed session records and settlement types

use super::table::SessionPlayer;
use serde::{Deserialize, Serialize};

/// How a finished session was paid
///
/// `OnCredit` carries the debtor so the variant is self-describing; the debt
/// ledger is keyed by that player name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    EasyPaisa,
    JazzCash,
    OnCredit { player_name: String },
}

impl PaymentMethod {
    /// Debtor name for on-credit payments
    pub fn credit_player(&self) -> Option<&str> {
        match self {
            PaymentMethod::OnCredit { player_name } => Some(player_name),
            _ => None,
        }
    }
}

/// One player's share of a session's total bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSplit {
    pub player_name: String,
    /// Amount in currency units, non-negative
    pub amount: i64,
}

/// Immutable record created when a session ends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedSession {
    pub id: String,
    pub table_id: i64,
    /// Player bindings as frozen at session start
    pub players: Vec<SessionPlayer>,
    pub game_type_name: String,
    pub duration_secs: i64,
    /// Total amount in currency units
    pub total_amount: i64,
    /// Per-player breakdown, in session player order
    pub splits: Vec<PaymentSplit>,
    /// Session end (Unix millis)
    pub end_time: i64,
    pub payment: PaymentMethod,
}
