//! Club Edge Server - snooker hall management backend
//!
//! # Architecture overview
//!
//! The server wraps a small session lifecycle and billing engine in a plain
//! JSON/HTTP API, with every aggregate persisted in an embedded key-value
//! store scoped by tenant (the club account's email):
//!
//! - **Sessions** (`sessions`): table occupancy state machine, billing
//!   calculator and settlement splitter
//! - **Store** (`store`): embedded redb database
//! - **Ledger** (`ledger`): session history, day counters, debt balances
//! - **Services** (`services`): game catalog, player directory, credentials
//! - **HTTP API** (`api`): per-resource routers
//!
//! # Module structure
//!
//! ```text
//! club-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── auth/          # tenant resolution (bearer token → club email)
//! ├── sessions/      # the session/billing/settlement engine
//! ├── ledger/        # history, counters, debts
//! ├── services/      # catalog, directory, credentials
//! ├── store/         # redb storage layer
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, time, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod ledger;
pub mod services;
pub mod sessions;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use ledger::LedgerService;
pub use services::{CatalogService, CredentialService, DirectoryService};
pub use sessions::{SessionError, SessionManager, Settlement};
pub use store::ClubStorage;
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ________      __
  / ____/ /_  __/ /_
 / /   / / / / / __ \
/ /___/ / /_/ / /_/ /
\____/_/\__,_/_.___/
    ______    __
   / ____/___/ /___ ____
  / __/ / __  / __ `/ _ \
 / /___/ /_/ / /_/ /  __/
/_____/\__,_/\__, /\___/
            /____/
    "#
    );
}
