//! Application services
//!
//! Store-backed collaborators around the session engine:
//!
//! - [`catalog`]: game-type rate catalog (seeded defaults + CRUD)
//! - [`directory`]: player directory (CRUD + name resolution)
//! - [`credential`]: seeded accounts, login and tenant tokens

pub mod catalog;
pub mod credential;
pub mod directory;

pub use catalog::CatalogService;
pub use credential::{CredentialService, LoginSession};
pub use directory::DirectoryService;
