//! Payments handlers

use axum::extract::State;
use shared::models::CompletedSession;

use crate::auth::CurrentClub;
use crate::core::ServerState;
use crate::utils::error::{JsonResult, ok};

/// GET /api/payments - completed sessions, newest first (at most 100)
pub async fn list(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<Vec<CompletedSession>> {
    Ok(ok(state.ledger.recent_sessions(&tenant)?))
}
