//! Result aliases and response helpers

use axum::Json;
use shared::{ApiResponse, AppError};

/// Result alias used across handlers and services
pub type AppResult<T> = Result<T, AppError>;

/// Handler result producing the uniform JSON envelope
pub type JsonResult<T> = AppResult<Json<ApiResponse<T>>>;

/// Wrap a payload in the success envelope
pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
