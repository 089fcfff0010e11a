//! Health check handler

use axum::Json;
use serde::Serialize;
use shared::ApiResponse;

use crate::utils::error::ok;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - liveness probe
pub async fn health() -> Json<ApiResponse<HealthStatus>> {
    ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
