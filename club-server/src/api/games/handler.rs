//! Game catalog handlers

use axum::Json;
use axum::extract::{Path, State};
use shared::models::{GameType, GameTypeCreate, GameTypeUpdate};

use crate::auth::CurrentClub;
use crate::core::ServerState;
use crate::utils::error::{JsonResult, ok};

/// GET /api/games - full catalog
pub async fn list(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<Vec<GameType>> {
    Ok(ok(state.catalog.list(&tenant)?))
}

/// POST /api/games - add a custom game type
pub async fn create(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Json(payload): Json<GameTypeCreate>,
) -> JsonResult<GameType> {
    Ok(ok(state.catalog.create(&tenant, payload)?))
}

/// PUT /api/games/{id} - edit a game type
pub async fn update(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<String>,
    Json(payload): Json<GameTypeUpdate>,
) -> JsonResult<GameType> {
    Ok(ok(state.catalog.update(&tenant, &id, payload)?))
}

/// POST /api/games/{id}/toggle - flip enabled state
pub async fn toggle(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<String>,
) -> JsonResult<GameType> {
    Ok(ok(state.catalog.toggle(&tenant, &id)?))
}

/// DELETE /api/games/{id} - remove a game type
pub async fn remove(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Path(id): Path<String>,
) -> JsonResult<bool> {
    Ok(ok(state.catalog.delete(&tenant, &id)?))
}
