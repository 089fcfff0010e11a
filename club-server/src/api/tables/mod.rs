//! Table API module
//!
//! Table inventory plus the three session-engine endpoints: start, live
//! bill, and end.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/tables", get(handler::list).post(handler::create))
        .route("/api/tables/{id}", axum::routing::delete(handler::remove))
        .route("/api/tables/{id}/session", post(handler::start_session))
        .route("/api/tables/{id}/bill", get(handler::live_bill))
        .route("/api/tables/{id}/session/end", post(handler::end_session))
}
