//! SessionManager - table occupancy state machine
//!
//! Owns every table's occupancy state and active session, and orchestrates
//! the two transitions:
//!
//! ```text
//! start(table, players, game type)          end(table, settlement, payment)
//!     ├─ 1. Validate player names               ├─ 1. Begin write transaction
//!     ├─ 2. Table must be Available             ├─ 2. Table must be Occupied
//!     ├─ 3. Freeze directory bindings           ├─ 3. Price the session (billing)
//!     └─ 4. Occupy + persist                    ├─ 4. Split the bill (settlement)
//!                                               ├─ 5. Prepend history record
//!                                               ├─ 6. Record debt if on credit
//!                                               ├─ 7. Bump day counters
//!                                               ├─ 8. Free the table
//!                                               └─ 9. Commit (all or nothing)
//! ```
//!
//! The end transition runs entirely inside one storage write transaction, so
//! a precondition failure at any step leaves tables, history, counters and
//! debts untouched.

use serde::Serialize;
use shared::models::{
    CompletedSession, PaymentMethod, RateUnit, Session, SessionPlayer, Table, TableStatus,
};
use shared::{AppError, ErrorCode};
use std::sync::Arc;
use thiserror::Error;

use super::billing::compute_bill;
use super::clock::{Clock, SystemClock};
use super::settlement::{Settlement, SettlementError, compute_splits};
use crate::store::{ClubStorage, StorageError};
use crate::utils::time::{date_string_for_millis, format_duration, should_reset_counters};

/// Completed sessions kept per tenant, newest first
const RECENT_SESSIONS_CAP: usize = 100;

/// Players allowed on one table
const MIN_PLAYERS: usize = 1;
const MAX_PLAYERS: usize = 4;

/// Marker set once a tenant's initial table inventory has been created
const TABLES_SEEDED_FLAG: &str = "tables_seeded";

/// Session state machine errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Table {0} not found")]
    TableNotFound(i64),

    #[error("Table {0} already has an active session")]
    TableOccupied(i64),

    #[error("Table {0} has no active session")]
    NoActiveSession(i64),

    #[error("Table {0} cannot be removed while occupied")]
    TableStillOccupied(i64),

    #[error("Sessions require between 1 and 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("Player names must not be empty")]
    EmptyPlayerName,

    #[error("Credit player '{0}' is not a registered session participant")]
    CreditPlayerNotEligible(String),

    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let code = match &err {
            SessionError::Storage(_) => return AppError::database(err.to_string()),
            SessionError::TableNotFound(_) => ErrorCode::TableNotFound,
            SessionError::TableOccupied(_) => ErrorCode::TableOccupied,
            SessionError::NoActiveSession(_) => ErrorCode::NoActiveSession,
            SessionError::TableStillOccupied(_) => ErrorCode::TableStillOccupied,
            SessionError::InvalidPlayerCount(_) => ErrorCode::InvalidPlayerCount,
            SessionError::EmptyPlayerName => ErrorCode::ValidationFailed,
            SessionError::CreditPlayerNotEligible(_) => ErrorCode::CreditPlayerNotEligible,
            SessionError::Settlement(inner) => match inner {
                SettlementError::EmptyTeam => ErrorCode::EmptyTeam,
                SettlementError::SumMismatch { .. } => ErrorCode::SplitTotalMismatch,
                SettlementError::NegativeAmount(_) => ErrorCode::InvalidAmount,
                _ => ErrorCode::InvalidSplit,
            },
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Live pricing snapshot for an occupied table (pure read)
#[derive(Debug, Clone, Serialize)]
pub struct LiveBill {
    pub table_id: i64,
    pub game_type_name: String,
    pub rate_unit: RateUnit,
    pub rate: i64,
    pub elapsed_secs: i64,
    pub amount: i64,
}

/// Table session state machine
pub struct SessionManager {
    storage: ClubStorage,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("storage", &self.storage)
            .finish()
    }
}

impl SessionManager {
    /// Create a manager over the given storage, using the system clock
    pub fn new(storage: ClubStorage) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    /// Create a manager with an injected clock (used by tests)
    pub fn with_clock(storage: ClubStorage, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    // ========== Table inventory ==========

    /// All of a tenant's tables, ordered by id
    pub fn list_tables(&self, tenant: &str) -> SessionResult<Vec<Table>> {
        Ok(self.storage.list_tables(tenant)?)
    }

    /// Seed the initial table inventory once per tenant
    ///
    /// Subsequent calls are no-ops even if the operator has since removed
    /// tables; the marker keeps deleted tables from resurrecting.
    pub fn ensure_tables_seeded(&self, tenant: &str, count: u32) -> SessionResult<()> {
        if self.storage.is_flag_set(tenant, TABLES_SEEDED_FLAG)? {
            return Ok(());
        }
        for id in 1..=count as i64 {
            self.storage
                .put_table(tenant, &Table::available(id, format!("Table {id}")))?;
        }
        self.storage.set_flag(tenant, TABLES_SEEDED_FLAG)?;
        tracing::info!(tenant = %tenant, count = count, "Seeded initial tables");
        Ok(())
    }

    /// Add a table; id = max existing id + 1 (1 if none)
    pub fn add_table(&self, tenant: &str, name: Option<String>) -> SessionResult<Table> {
        let id = self.storage.next_table_id(tenant)?;
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => format!("Table {id}"),
        };
        let table = Table::available(id, name);
        self.storage.put_table(tenant, &table)?;
        tracing::info!(tenant = %tenant, table_id = id, "Table added");
        Ok(table)
    }

    /// Remove a table; only allowed while it is Available
    pub fn remove_table(&self, tenant: &str, table_id: i64) -> SessionResult<()> {
        let table = self
            .storage
            .get_table(tenant, table_id)?
            .ok_or(SessionError::TableNotFound(table_id))?;
        if table.is_occupied() {
            return Err(SessionError::TableStillOccupied(table_id));
        }
        self.storage.delete_table(tenant, table_id)?;
        tracing::info!(tenant = %tenant, table_id = table_id, "Table removed");
        Ok(())
    }

    // ========== Transitions ==========

    /// Available → Occupied
    ///
    /// Player names are trimmed and resolved against the player directory;
    /// the `is_registered`/`player_id` bindings are frozen here and never
    /// re-validated, even if the directory changes mid-session.
    pub fn start_session(
        &self,
        tenant: &str,
        table_id: i64,
        player_names: &[String],
        game_type_name: &str,
        rate_unit: RateUnit,
        rate: i64,
    ) -> SessionResult<Table> {
        let names: Vec<&str> = player_names.iter().map(|n| n.trim()).collect();
        if names.len() < MIN_PLAYERS || names.len() > MAX_PLAYERS {
            return Err(SessionError::InvalidPlayerCount(names.len()));
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(SessionError::EmptyPlayerName);
        }

        let mut table = self
            .storage
            .get_table(tenant, table_id)?
            .ok_or(SessionError::TableNotFound(table_id))?;
        if table.is_occupied() {
            return Err(SessionError::TableOccupied(table_id));
        }

        let directory = self.storage.list_players(tenant)?;
        let players: Vec<SessionPlayer> = names
            .iter()
            .map(|name| {
                let saved = directory
                    .iter()
                    .find(|p| p.name.to_lowercase() == name.to_lowercase());
                SessionPlayer {
                    name: name.to_string(),
                    is_registered: saved.is_some(),
                    player_id: saved.map(|p| p.id.clone()),
                }
            })
            .collect();

        table.status = TableStatus::Occupied;
        table.session = Some(Session {
            players,
            game_type_name: game_type_name.to_string(),
            rate_unit,
            rate,
            start_time: self.clock.now_millis(),
        });
        self.storage.put_table(tenant, &table)?;

        tracing::info!(
            tenant = %tenant,
            table_id = table_id,
            game_type = %game_type_name,
            players = names.len(),
            "Session started"
        );
        Ok(table)
    }

    /// Live elapsed time and bill for an occupied table (never mutates)
    pub fn live_bill(&self, tenant: &str, table_id: i64) -> SessionResult<LiveBill> {
        let table = self
            .storage
            .get_table(tenant, table_id)?
            .ok_or(SessionError::TableNotFound(table_id))?;
        let session = table
            .session
            .as_ref()
            .ok_or(SessionError::NoActiveSession(table_id))?;

        let elapsed_secs = self.elapsed_secs(session);
        Ok(LiveBill {
            table_id,
            game_type_name: session.game_type_name.clone(),
            rate_unit: session.rate_unit,
            rate: session.rate,
            elapsed_secs,
            amount: compute_bill(session.rate_unit, session.rate, elapsed_secs),
        })
    }

    /// Occupied → Available
    ///
    /// Prices the session, validates and applies the settlement, then commits
    /// the history record, debt entry, day counters and the freed table in
    /// one storage transaction.
    pub fn end_session(
        &self,
        tenant: &str,
        table_id: i64,
        settlement: &Settlement,
        payment: PaymentMethod,
    ) -> SessionResult<CompletedSession> {
        let txn = self.storage.begin_write()?;

        let mut table = self
            .storage
            .get_table_in(&txn, tenant, table_id)?
            .ok_or(SessionError::TableNotFound(table_id))?;
        let session = table
            .session
            .clone()
            .ok_or(SessionError::NoActiveSession(table_id))?;

        let now = self.clock.now_millis();
        let elapsed_secs = ((now - session.start_time) / 1000).max(0);
        let total_amount = compute_bill(session.rate_unit, session.rate, elapsed_secs);
        let splits = compute_splits(&session.players, total_amount, settlement)?;

        if let Some(credit_player) = payment.credit_player() {
            let eligible = session.players.iter().any(|p| {
                p.is_registered && p.name.to_lowercase() == credit_player.trim().to_lowercase()
            });
            if !eligible {
                return Err(SessionError::CreditPlayerNotEligible(
                    credit_player.to_string(),
                ));
            }
        }

        let completed = CompletedSession {
            id: uuid::Uuid::new_v4().to_string(),
            table_id,
            players: session.players.clone(),
            game_type_name: session.game_type_name.clone(),
            duration_secs: elapsed_secs,
            total_amount,
            splits,
            end_time: now,
            payment,
        };

        // History (newest first, bounded)
        let mut recent = self.storage.get_recent_sessions_in(&txn, tenant)?;
        recent.insert(0, completed.clone());
        recent.truncate(RECENT_SESSIONS_CAP);
        self.storage.put_recent_sessions_in(&txn, tenant, &recent)?;

        // Debt ledger
        if let Some(credit_player) = completed.payment.credit_player() {
            let balance = self.storage.get_debt_in(&txn, tenant, credit_player)? + total_amount;
            self.storage
                .set_debt_in(&txn, tenant, credit_player, balance)?;
        }

        // Day counters, reset first when the stored date is stale
        let today = date_string_for_millis(now);
        let mut stats = match self.storage.get_day_stats_in(&txn, tenant)? {
            Some(stats) if !should_reset_counters(&stats.date, &today) => stats,
            _ => shared::models::DayStats::empty(&today),
        };
        stats.revenue += total_amount;
        stats.sessions += 1;
        self.storage.put_day_stats_in(&txn, tenant, &stats)?;

        // Free the table
        table.status = TableStatus::Available;
        table.session = None;
        self.storage.put_table_in(&txn, tenant, &table)?;

        txn.commit().map_err(StorageError::from)?;

        tracing::info!(
            tenant = %tenant,
            table_id = table_id,
            total_amount = total_amount,
            duration = %format_duration(elapsed_secs),
            "Session ended"
        );
        Ok(completed)
    }

    fn elapsed_secs(&self, session: &Session) -> i64 {
        ((self.clock.now_millis() - session.start_time) / 1000).max(0)
    }
}

#[cfg(test)]
mod tests;
