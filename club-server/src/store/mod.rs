//! redb-based storage layer for club state
//!
//! Every aggregate the original kept in browser key-value storage lives here,
//! scoped by tenant (the club account's email) exactly as the old
//! `club_*_{email}` keys were:
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `tables` | `(tenant, table_id)` | `Table` | Table inventory + active sessions |
//! | `game_types` | `(tenant, id)` | `GameType` | Rate catalog |
//! | `players` | `(tenant, id)` | `Player` | Player directory |
//! | `recent_sessions` | `tenant` | `Vec<CompletedSession>` | Bounded history (100) |
//! | `day_stats` | `tenant` | `DayStats` | Today's revenue/session counters |
//! | `debts` | `(tenant, player_name)` | `i64` | Outstanding debt per player |
//! | `accounts` | `email` | `ClubAccount` | Seeded credentials + profiles |
//! | `flags` | `(tenant, flag)` | `()` | One-shot seeding markers |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a session-end commit either lands completely
//! or not at all. The session engine leans on that: tables, history, counters
//! and debts for one `end()` all go through a single write transaction.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{ClubAccount, CompletedSession, DayStats, GameType, Player, Table};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table inventory: key = (tenant, table_id), value = JSON-serialized Table
const TABLES_TABLE: TableDefinition<(&str, i64), &[u8]> = TableDefinition::new("tables");

/// Rate catalog: key = (tenant, game_type_id), value = JSON-serialized GameType
const GAME_TYPES_TABLE: TableDefinition<(&str, &str), &[u8]> = TableDefinition::new("game_types");

/// Player directory: key = (tenant, player_id), value = JSON-serialized Player
const PLAYERS_TABLE: TableDefinition<(&str, &str), &[u8]> = TableDefinition::new("players");

/// Completed-session history: key = tenant, value = JSON list, newest first
const RECENT_SESSIONS_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("recent_sessions");

/// Day counters: key = tenant, value = JSON-serialized DayStats
const DAY_STATS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("day_stats");

/// Debt ledger: key = (tenant, player_name), value = outstanding amount
const DEBTS_TABLE: TableDefinition<(&str, &str), i64> = TableDefinition::new("debts");

/// Credential records: key = account email, value = JSON-serialized ClubAccount
const ACCOUNTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("accounts");

/// One-shot markers (e.g. "defaults were seeded"): key = (tenant, flag)
const FLAGS_TABLE: TableDefinition<(&str, &str), ()> = TableDefinition::new("flags");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for shared::AppError {
    fn from(err: StorageError) -> Self {
        shared::AppError::database(err.to_string())
    }
}

fn to_bytes<T: Serialize>(value: &T) -> StorageResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> StorageResult<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Club storage backed by redb
#[derive(Clone)]
pub struct ClubStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for ClubStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClubStorage").finish()
    }
}

impl ClubStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Create all tables up front so read transactions never hit a missing one
    fn init_tables(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(TABLES_TABLE)?;
            let _ = write_txn.open_table(GAME_TYPES_TABLE)?;
            let _ = write_txn.open_table(PLAYERS_TABLE)?;
            let _ = write_txn.open_table(RECENT_SESSIONS_TABLE)?;
            let _ = write_txn.open_table(DAY_STATS_TABLE)?;
            let _ = write_txn.open_table(DEBTS_TABLE)?;
            let _ = write_txn.open_table(ACCOUNTS_TABLE)?;
            let _ = write_txn.open_table(FLAGS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction (for multi-step commits)
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Tables ==========

    /// All of a tenant's tables, ordered by id
    pub fn list_tables(&self, tenant: &str) -> StorageResult<Vec<Table>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLES_TABLE)?;
        let mut out = Vec::new();
        for entry in table.range((tenant, i64::MIN)..)? {
            let (key, value) = entry?;
            if key.value().0 != tenant {
                break;
            }
            out.push(from_bytes(value.value())?);
        }
        Ok(out)
    }

    pub fn get_table(&self, tenant: &str, id: i64) -> StorageResult<Option<Table>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLES_TABLE)?;
        table
            .get((tenant, id))?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn put_table(&self, tenant: &str, record: &Table) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        self.put_table_in(&txn, tenant, record)?;
        txn.commit()?;
        Ok(())
    }

    /// Write a table record inside an existing transaction
    pub fn put_table_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
        record: &Table,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(TABLES_TABLE)?;
        table.insert((tenant, record.id), to_bytes(record)?.as_slice())?;
        Ok(())
    }

    /// Read a table record inside an existing write transaction
    pub fn get_table_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
        id: i64,
    ) -> StorageResult<Option<Table>> {
        let table = txn.open_table(TABLES_TABLE)?;
        table
            .get((tenant, id))?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn delete_table(&self, tenant: &str, id: i64) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(TABLES_TABLE)?;
            table.remove((tenant, id))?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    /// Next table id: max existing id + 1, or 1 if the tenant has none
    pub fn next_table_id(&self, tenant: &str) -> StorageResult<i64> {
        let max = self
            .list_tables(tenant)?
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0);
        Ok(max + 1)
    }

    // ========== Game types ==========

    pub fn list_game_types(&self, tenant: &str) -> StorageResult<Vec<GameType>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(GAME_TYPES_TABLE)?;
        let mut out = Vec::new();
        for entry in table.range((tenant, "")..)? {
            let (key, value) = entry?;
            if key.value().0 != tenant {
                break;
            }
            out.push(from_bytes(value.value())?);
        }
        Ok(out)
    }

    pub fn get_game_type(&self, tenant: &str, id: &str) -> StorageResult<Option<GameType>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(GAME_TYPES_TABLE)?;
        table
            .get((tenant, id))?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn put_game_type(&self, tenant: &str, record: &GameType) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(GAME_TYPES_TABLE)?;
            table.insert((tenant, record.id.as_str()), to_bytes(record)?.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn delete_game_type(&self, tenant: &str, id: &str) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(GAME_TYPES_TABLE)?;
            table.remove((tenant, id))?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    // ========== Players ==========

    pub fn list_players(&self, tenant: &str) -> StorageResult<Vec<Player>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PLAYERS_TABLE)?;
        let mut out = Vec::new();
        for entry in table.range((tenant, "")..)? {
            let (key, value) = entry?;
            if key.value().0 != tenant {
                break;
            }
            out.push(from_bytes(value.value())?);
        }
        Ok(out)
    }

    pub fn get_player(&self, tenant: &str, id: &str) -> StorageResult<Option<Player>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PLAYERS_TABLE)?;
        table
            .get((tenant, id))?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn put_player(&self, tenant: &str, record: &Player) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(PLAYERS_TABLE)?;
            table.insert((tenant, record.id.as_str()), to_bytes(record)?.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn delete_player(&self, tenant: &str, id: &str) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(PLAYERS_TABLE)?;
            table.remove((tenant, id))?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    // ========== Recent sessions ==========

    pub fn get_recent_sessions(&self, tenant: &str) -> StorageResult<Vec<CompletedSession>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECENT_SESSIONS_TABLE)?;
        match table.get(tenant)? {
            Some(guard) => from_bytes(guard.value()),
            None => Ok(Vec::new()),
        }
    }

    /// Read the recent-sessions list inside an existing write transaction
    pub fn get_recent_sessions_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
    ) -> StorageResult<Vec<CompletedSession>> {
        let table = txn.open_table(RECENT_SESSIONS_TABLE)?;
        match table.get(tenant)? {
            Some(guard) => from_bytes(guard.value()),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the recent-sessions list inside an existing transaction
    pub fn put_recent_sessions_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
        sessions: &[CompletedSession],
    ) -> StorageResult<()> {
        let mut table = txn.open_table(RECENT_SESSIONS_TABLE)?;
        table.insert(tenant, to_bytes(&sessions)?.as_slice())?;
        Ok(())
    }

    // ========== Day stats ==========

    pub fn get_day_stats(&self, tenant: &str) -> StorageResult<Option<DayStats>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DAY_STATS_TABLE)?;
        table
            .get(tenant)?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn get_day_stats_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
    ) -> StorageResult<Option<DayStats>> {
        let table = txn.open_table(DAY_STATS_TABLE)?;
        table
            .get(tenant)?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn put_day_stats(&self, tenant: &str, stats: &DayStats) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        self.put_day_stats_in(&txn, tenant, stats)?;
        txn.commit()?;
        Ok(())
    }

    pub fn put_day_stats_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
        stats: &DayStats,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(DAY_STATS_TABLE)?;
        table.insert(tenant, to_bytes(stats)?.as_slice())?;
        Ok(())
    }

    // ========== Debts ==========

    /// All outstanding debts for a tenant, as (player name, amount) pairs
    pub fn list_debts(&self, tenant: &str) -> StorageResult<Vec<(String, i64)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DEBTS_TABLE)?;
        let mut out = Vec::new();
        for entry in table.range((tenant, "")..)? {
            let (key, value) = entry?;
            let (t, name) = key.value();
            if t != tenant {
                break;
            }
            out.push((name.to_string(), value.value()));
        }
        Ok(out)
    }

    pub fn get_debt(&self, tenant: &str, player_name: &str) -> StorageResult<i64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DEBTS_TABLE)?;
        Ok(table
            .get((tenant, player_name))?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    pub fn get_debt_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
        player_name: &str,
    ) -> StorageResult<i64> {
        let table = txn.open_table(DEBTS_TABLE)?;
        Ok(table
            .get((tenant, player_name))?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    /// Set a player's outstanding debt; zero removes the entry
    pub fn set_debt_in(
        &self,
        txn: &WriteTransaction,
        tenant: &str,
        player_name: &str,
        amount: i64,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(DEBTS_TABLE)?;
        if amount == 0 {
            table.remove((tenant, player_name))?;
        } else {
            table.insert((tenant, player_name), amount)?;
        }
        Ok(())
    }

    // ========== Accounts ==========

    pub fn get_account(&self, email: &str) -> StorageResult<Option<ClubAccount>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ACCOUNTS_TABLE)?;
        table
            .get(email)?
            .map(|guard| from_bytes(guard.value()))
            .transpose()
    }

    pub fn put_account(&self, account: &ClubAccount) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ACCOUNTS_TABLE)?;
            table.insert(account.email.as_str(), to_bytes(account)?.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Flags ==========

    /// Whether a one-shot marker has been set for the tenant
    pub fn is_flag_set(&self, tenant: &str, flag: &str) -> StorageResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FLAGS_TABLE)?;
        Ok(table.get((tenant, flag))?.is_some())
    }

    pub fn set_flag(&self, tenant: &str, flag: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(FLAGS_TABLE)?;
            table.insert((tenant, flag), ())?;
        }
        txn.commit()?;
        Ok(())
    }
}
