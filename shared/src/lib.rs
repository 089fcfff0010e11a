//! Shared domain models and error types for the Club Edge Server
//!
//! This crate holds everything both the server and its clients need to agree
//! on:
//!
//! - **Models** (`models`): table/session aggregates, game catalog entries,
//!   player directory records, completed-session records, day counters and
//!   club profile/account data
//! - **Errors** (`error`): unified error codes, the [`AppError`] type and the
//!   [`ApiResponse`] envelope

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, ErrorCode};
