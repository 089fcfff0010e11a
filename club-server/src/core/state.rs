//! Server state - shared service handles

use std::path::Path;
use std::sync::Arc;

use shared::AppError;

use crate::core::Config;
use crate::ledger::LedgerService;
use crate::services::{CatalogService, CredentialService, DirectoryService};
use crate::sessions::SessionManager;
use crate::store::ClubStorage;
use crate::utils::error::AppResult;

/// Shared handles behind every request
///
/// Cheap to clone: every service sits behind an `Arc`, and the storage handle
/// itself is a shared reference to one embedded database.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | storage | Embedded store (redb) |
/// | sessions | Table occupancy state machine |
/// | catalog | Game-type rate catalog |
/// | directory | Player directory |
/// | ledger | History, day counters, debts |
/// | credentials | Accounts, login, tenant tokens |
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub storage: ClubStorage,
    pub sessions: Arc<SessionManager>,
    pub catalog: Arc<CatalogService>,
    pub directory: Arc<DirectoryService>,
    pub ledger: Arc<LedgerService>,
    pub credentials: Arc<CredentialService>,
}

impl ServerState {
    /// Open storage, seed the stock accounts and wire up every service
    pub fn initialize(config: &Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::internal(format!(
                "failed to create work dir {}: {e}",
                config.work_dir
            ))
        })?;
        let db_path = Path::new(&config.work_dir).join("club.redb");
        let storage = ClubStorage::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Storage opened");

        let credentials = Arc::new(CredentialService::new(storage.clone()));
        credentials.ensure_seed_accounts()?;

        Ok(Self {
            config: config.clone(),
            sessions: Arc::new(SessionManager::new(storage.clone())),
            catalog: Arc::new(CatalogService::new(storage.clone())),
            directory: Arc::new(DirectoryService::new(storage.clone())),
            ledger: Arc::new(LedgerService::new(storage.clone())),
            credentials,
            storage,
        })
    }
}
