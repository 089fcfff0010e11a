//! Settlement splitter
//!
//! Turns a finished session's total bill into a per-player breakdown
//! according to the strategy the operator picked. Pure: validation failures
//! block the end transition, nothing here touches state.
//!
//! Equal and teams shares round up individually, so the sum of splits can
//! exceed the total by up to `player_count - 1` units. That per-share ceiling
//! is the reference behavior and is preserved; the remainder is never
//! redistributed.

use serde::{Deserialize, Serialize};
use shared::models::{PaymentSplit, SessionPlayer};
use thiserror::Error;

/// Team label for the teams strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    A,
    B,
}

/// Operator-chosen settlement strategy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "strategy", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Settlement {
    /// "Loser pays": one designated player covers the whole bill
    SinglePayer { payer_index: usize },
    /// Everyone pays `ceil(total / player_count)`
    Equal,
    /// Players on the losing team share the bill, winners pay nothing
    Teams { assignments: Vec<Team>, losing: Team },
    /// Operator supplies each player's amount; must sum to the total exactly
    Custom { amounts: Vec<i64> },
}

/// Settlement validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("payer index {index} out of range for {players} players")]
    PayerOutOfRange { index: usize, players: usize },

    #[error("expected {expected} team assignments, got {got}")]
    AssignmentCountMismatch { expected: usize, got: usize },

    #[error("both teams must have at least one player")]
    EmptyTeam,

    #[error("expected {expected} custom amounts, got {got}")]
    AmountCountMismatch { expected: usize, got: usize },

    #[error("custom amounts must be non-negative, got {0}")]
    NegativeAmount(i64),

    #[error("custom amounts sum to {got}, total bill is {expected}")]
    SumMismatch { expected: i64, got: i64 },
}

fn ceil_share(total: i64, payers: usize) -> i64 {
    (total.max(0) as u64).div_ceil(payers as u64) as i64
}

/// Compute the per-player breakdown for a finished session
///
/// Output order matches the session's player order and is suitable for direct
/// use as `CompletedSession::splits`.
pub fn compute_splits(
    players: &[SessionPlayer],
    total: i64,
    settlement: &Settlement,
) -> Result<Vec<PaymentSplit>, SettlementError> {
    let count = players.len();
    let amounts: Vec<i64> = match settlement {
        Settlement::SinglePayer { payer_index } => {
            if *payer_index >= count {
                return Err(SettlementError::PayerOutOfRange {
                    index: *payer_index,
                    players: count,
                });
            }
            (0..count)
                .map(|i| if i == *payer_index { total } else { 0 })
                .collect()
        }
        Settlement::Equal => {
            let share = ceil_share(total, count);
            vec![share; count]
        }
        Settlement::Teams { assignments, losing } => {
            if assignments.len() != count {
                return Err(SettlementError::AssignmentCountMismatch {
                    expected: count,
                    got: assignments.len(),
                });
            }
            let losing_size = assignments.iter().filter(|t| **t == *losing).count();
            if losing_size == 0 || losing_size == count {
                return Err(SettlementError::EmptyTeam);
            }
            let each_pays = ceil_share(total, losing_size);
            assignments
                .iter()
                .map(|t| if *t == *losing { each_pays } else { 0 })
                .collect()
        }
        Settlement::Custom { amounts } => {
            if amounts.len() != count {
                return Err(SettlementError::AmountCountMismatch {
                    expected: count,
                    got: amounts.len(),
                });
            }
            if let Some(bad) = amounts.iter().find(|a| **a < 0) {
                return Err(SettlementError::NegativeAmount(*bad));
            }
            let sum: i64 = amounts.iter().sum();
            if sum != total {
                return Err(SettlementError::SumMismatch {
                    expected: total,
                    got: sum,
                });
            }
            amounts.clone()
        }
    };

    Ok(players
        .iter()
        .zip(amounts)
        .map(|(p, amount)| PaymentSplit {
            player_name: p.name.clone(),
            amount,
        })
        .collect())
}
