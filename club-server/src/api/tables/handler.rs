//! Table API handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use shared::models::{PaymentMethod, Table, TableCreate};

use crate::auth::CurrentClub;
use crate::core::ServerState;
use crate::sessions::{LiveBill, Settlement};
use crate::utils::error::{JsonResult, ok};
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text};

/// Start-session payload: operator-entered names plus the chosen catalog entry
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub players: Vec<String>,
    pub game_type_id: String,
}

/// End-session payload: settlement strategy plus how the bill was paid
#[derive(Debug, Deserialize)]
pub struct EndSessionRequest {
    pub settlement: Settlement,
    pub payment: PaymentMethod,
}

/// GET /api/tables - table inventory (seeded from the profile on first read)
pub async fn list(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<Vec<Table>> {
    let profile = state.credentials.profile(&tenant)?;
    state.sessions.ensure_tables_seeded(&tenant, profile.tables)?;
    Ok(ok(state.sessions.list_tables(&tenant)?))
}

/// POST /api/tables - add a table
pub async fn create(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Json(payload): Json<TableCreate>,
) -> JsonResult<Table> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    Ok(ok(state.sessions.add_table(&tenant, payload.name)?))
}

/// DELETE /api/tables/{id} - remove an available table
pub async fn remove(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<i64>,
) -> JsonResult<bool> {
    state.sessions.remove_table(&tenant, id)?;
    Ok(ok(true))
}

/// POST /api/tables/{id}/session - start a session
///
/// The chosen game type is resolved against the catalog here (enabled entries
/// only); its name, unit and rate are frozen into the session.
pub async fn start_session(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<i64>,
    Json(payload): Json<StartSessionRequest>,
) -> JsonResult<Table> {
    let game = state.catalog.find_enabled(&tenant, &payload.game_type_id)?;
    let table = state.sessions.start_session(
        &tenant,
        id,
        &payload.players,
        &game.name,
        game.unit,
        game.rate,
    )?;
    Ok(ok(table))
}

/// GET /api/tables/{id}/bill - live elapsed time and bill (pure read)
pub async fn live_bill(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<i64>,
) -> JsonResult<LiveBill> {
    Ok(ok(state.sessions.live_bill(&tenant, id)?))
}

/// POST /api/tables/{id}/session/end - settle and free the table
pub async fn end_session(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<i64>,
    Json(payload): Json<EndSessionRequest>,
) -> JsonResult<shared::models::CompletedSession> {
    let completed =
        state
            .sessions
            .end_session(&tenant, id, &payload.settlement, payload.payment)?;
    Ok(ok(completed))
}
