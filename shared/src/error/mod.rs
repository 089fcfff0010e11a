//! Unified error handling
//!
//! - [`ErrorCode`]: stable u16 codes shared with clients
//! - [`AppError`]: the primary error type (code + message + details)
//! - [`ApiResponse`]: the JSON envelope every endpoint answers with

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError};
