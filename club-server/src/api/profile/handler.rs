//! Club profile handlers

use axum::Json;
use axum::extract::State;
use shared::models::{ClubProfile, ClubProfileUpdate};

use crate::auth::CurrentClub;
use crate::core::ServerState;
use crate::utils::error::{JsonResult, ok};

/// GET /api/profile - current club's profile settings
pub async fn get_profile(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
) -> JsonResult<ClubProfile> {
    Ok(ok(state.credentials.profile(&tenant)?))
}

/// PUT /api/profile - update profile settings
pub async fn update_profile(
    State(state): State<ServerState>,
    CurrentClub(tenant): CurrentClub,
    Json(payload): Json<ClubProfileUpdate>,
) -> JsonResult<ClubProfile> {
    Ok(ok(state.credentials.update_profile(&tenant, payload)?))
}
