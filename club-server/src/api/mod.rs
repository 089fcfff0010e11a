//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login/logout
//! - [`profile`] - club profile settings
//! - [`tables`] - table inventory and the session start/end/bill endpoints
//! - [`games`] - game-type catalog
//! - [`players`] - player directory and the debt ledger
//! - [`payments`] - completed-session history
//! - [`statistics`] - day counters and occupancy overview

pub mod auth;
pub mod games;
pub mod health;
pub mod payments;
pub mod players;
pub mod profile;
pub mod statistics;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::error::{AppResult, JsonResult, ok};
