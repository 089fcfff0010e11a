//! Auth handlers

use axum::Json;
use axum::extract::State;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::LoginSession;
use crate::utils::error::{JsonResult, ok};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - credential lookup, mints a session token
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> JsonResult<LoginSession> {
    let session = state.credentials.login(&payload.email, &payload.password)?;
    Ok(ok(session))
}

/// POST /api/auth/logout - drop the caller's session token
pub async fn logout(State(state): State<ServerState>, headers: HeaderMap) -> JsonResult<bool> {
    let dropped = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| state.credentials.logout(token))
        .unwrap_or(false);
    Ok(ok(dropped))
}
