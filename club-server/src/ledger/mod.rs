//! Ledger sinks — day counters, session history, debt balances
//!
//! The session engine writes these inside its end-transition commit; this
//! service is the read/settle surface the API exposes over the same store.

use serde::{Deserialize, Serialize};
use shared::models::{CompletedSession, DayStats};
use shared::{AppError, ErrorCode};

use crate::store::ClubStorage;
use crate::utils::error::AppResult;
use crate::utils::time::{should_reset_counters, today_string};

/// One player's outstanding balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtEntry {
    pub player_name: String,
    /// Outstanding amount in currency units
    pub amount: i64,
}

#[derive(Debug, Clone)]
pub struct LedgerService {
    storage: ClubStorage,
}

impl LedgerService {
    pub fn new(storage: ClubStorage) -> Self {
        Self { storage }
    }

    /// Completed sessions, newest first (at most 100)
    pub fn recent_sessions(&self, tenant: &str) -> AppResult<Vec<CompletedSession>> {
        Ok(self.storage.get_recent_sessions(tenant)?)
    }

    /// Today's counters
    ///
    /// Counters recorded under an older date are zeroed (and persisted) on
    /// the first read of the new day, before anything increments them.
    pub fn today_stats(&self, tenant: &str) -> AppResult<DayStats> {
        let today = today_string();
        match self.storage.get_day_stats(tenant)? {
            Some(stats) if !should_reset_counters(&stats.date, &today) => Ok(stats),
            _ => {
                let fresh = DayStats::empty(&today);
                self.storage.put_day_stats(tenant, &fresh)?;
                Ok(fresh)
            }
        }
    }

    /// All outstanding debts, largest first
    pub fn debts(&self, tenant: &str) -> AppResult<Vec<DebtEntry>> {
        let mut entries: Vec<DebtEntry> = self
            .storage
            .list_debts(tenant)?
            .into_iter()
            .map(|(player_name, amount)| DebtEntry {
                player_name,
                amount,
            })
            .collect();
        entries.sort_by(|a, b| b.amount.cmp(&a.amount));
        Ok(entries)
    }

    /// Record a repayment against a player's outstanding debt
    ///
    /// The balance floors at zero; a fully settled entry is removed.
    pub fn settle_debt(
        &self,
        tenant: &str,
        player_name: &str,
        amount: i64,
    ) -> AppResult<DebtEntry> {
        if amount <= 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidAmount,
                format!("settle amount must be positive, got {amount}"),
            ));
        }
        let player_name = player_name.trim();
        let current = self.storage.get_debt(tenant, player_name)?;
        if current == 0 {
            return Err(AppError::with_message(
                ErrorCode::DebtNotFound,
                format!("no outstanding debt for '{player_name}'"),
            ));
        }

        let balance = (current - amount).max(0);
        let txn = self.storage.begin_write()?;
        self.storage.set_debt_in(&txn, tenant, player_name, balance)?;
        txn.commit().map_err(crate::store::StorageError::from)?;

        tracing::info!(
            tenant = %tenant,
            player = %player_name,
            paid = amount,
            balance = balance,
            "Debt settled"
        );
        Ok(DebtEntry {
            player_name: player_name.to_string(),
            amount: balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TENANT: &str = "ali@club.com";

    fn service() -> (LedgerService, ClubStorage) {
        let storage = ClubStorage::open_in_memory().unwrap();
        (LedgerService::new(storage.clone()), storage)
    }

    fn seed_debt(storage: &ClubStorage, name: &str, amount: i64) {
        let txn = storage.begin_write().unwrap();
        storage.set_debt_in(&txn, TENANT, name, amount).unwrap();
        txn.commit().unwrap();
    }

    #[test]
    fn test_partial_settle_keeps_remainder() {
        let (ledger, storage) = service();
        seed_debt(&storage, "Ahmed", 800);

        let entry = ledger.settle_debt(TENANT, "Ahmed", 300).unwrap();
        assert_eq!(entry.amount, 500);
        assert_eq!(storage.get_debt(TENANT, "Ahmed").unwrap(), 500);
    }

    #[test]
    fn test_overpayment_floors_at_zero_and_removes_entry() {
        let (ledger, storage) = service();
        seed_debt(&storage, "Ahmed", 200);

        let entry = ledger.settle_debt(TENANT, "Ahmed", 999).unwrap();
        assert_eq!(entry.amount, 0);
        assert!(storage.list_debts(TENANT).unwrap().is_empty());
    }

    #[test]
    fn test_settle_validates_input() {
        let (ledger, storage) = service();
        seed_debt(&storage, "Ahmed", 200);

        assert_eq!(
            ledger.settle_debt(TENANT, "Ahmed", 0).unwrap_err().code,
            ErrorCode::InvalidAmount
        );
        assert_eq!(
            ledger.settle_debt(TENANT, "Nobody", 100).unwrap_err().code,
            ErrorCode::DebtNotFound
        );
    }

    #[test]
    fn test_stale_counters_reset_on_read() {
        let (ledger, storage) = service();
        storage
            .put_day_stats(
                TENANT,
                &DayStats {
                    date: "2000-01-01".to_string(),
                    revenue: 9000,
                    sessions: 42,
                },
            )
            .unwrap();

        let stats = ledger.today_stats(TENANT).unwrap();
        assert_eq!(stats.revenue, 0);
        assert_eq!(stats.sessions, 0);
        assert_eq!(stats.date, today_string());

        // The reset was persisted
        let stored = storage.get_day_stats(TENANT).unwrap().unwrap();
        assert_eq!(stored.sessions, 0);
    }

    #[test]
    fn test_debts_sorted_largest_first() {
        let (ledger, storage) = service();
        seed_debt(&storage, "Ahmed", 300);
        seed_debt(&storage, "Bilal", 800);

        let debts = ledger.debts(TENANT).unwrap();
        assert_eq!(debts[0].player_name, "Bilal");
        assert_eq!(debts[1].player_name, "Ahmed");
    }
}
