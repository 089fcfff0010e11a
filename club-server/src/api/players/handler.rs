//! Player directory handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use shared::models::{Player, PlayerCreate, PlayerUpdate};

use crate::auth::CurrentClub;
use crate::core::ServerState;
use crate::ledger::DebtEntry;
use crate::utils::error::{JsonResult, ok};

#[derive(Debug, Deserialize)]
pub struct SettleDebtRequest {
    pub player_name: String,
    /// Amount being paid off, in currency units
    pub amount: i64,
}

/// GET /api/players - directory listing
pub async fn list(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<Vec<Player>> {
    Ok(ok(state.directory.list(&tenant)?))
}

/// POST /api/players - register a player
pub async fn create(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Json(payload): Json<PlayerCreate>,
) -> JsonResult<Player> {
    Ok(ok(state.directory.create(&tenant, payload)?))
}

/// PUT /api/players/{id} - edit a player
pub async fn update(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<String>,
    Json(payload): Json<PlayerUpdate>,
) -> JsonResult<Player> {
    Ok(ok(state.directory.update(&tenant, &id, payload)?))
}

/// DELETE /api/players/{id} - remove a player
pub async fn remove(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<String>,
) -> JsonResult<bool> {
    Ok(ok(state.directory.delete(&tenant, &id)?))
}

/// GET /api/players/debts - outstanding balances
pub async fn debts(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<Vec<DebtEntry>> {
    Ok(ok(state.ledger.debts(&tenant)?))
}

/// POST /api/players/debts/settle - record a repayment
pub async fn settle_debt(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Json(payload): Json<SettleDebtRequest>,
) -> JsonResult<DebtEntry> {
    Ok(ok(state
        .ledger
        .settle_debt(&tenant, &payload.player_name, payload.amount)?))
}
