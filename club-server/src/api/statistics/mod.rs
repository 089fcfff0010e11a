//! Statistics API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/statistics/today", get(handler::today))
        .route("/api/statistics/overview", get(handler::overview))
}
