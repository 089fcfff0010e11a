//! Statistics handlers

use axum::extract::State;
use serde::Serialize;
use shared::models::DayStats;

use crate::auth::CurrentClub;
use crate::core::ServerState;
use crate::utils::error::{JsonResult, ok};

/// Current floor occupancy
#[derive(Debug, Serialize)]
pub struct OccupancyOverview {
    pub total_tables: usize,
    pub occupied: usize,
    pub available: usize,
    /// Players seated across all active sessions
    pub active_players: usize,
}

/// GET /api/statistics/today - day counters (reset on first read of a new day)
pub async fn today(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<DayStats> {
    Ok(ok(state.ledger.today_stats(&tenant)?))
}

/// GET /api/statistics/overview - live occupancy snapshot
pub async fn overview(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<OccupancyOverview> {
    let tables = state.sessions.list_tables(&tenant)?;
    let occupied = tables.iter().filter(|t| t.is_occupied()).count();
    let active_players: usize = tables
        .iter()
        .filter_map(|t| t.session.as_ref())
        .map(|s| s.players.len())
        .sum();
    Ok(ok(OccupancyOverview {
        total_tables: tables.len(),
        occupied,
        available: tables.len() - occupied,
        active_players,
    }))
}
