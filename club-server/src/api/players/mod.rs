//! Player directory API module
//!
//! Directory CRUD plus the debt ledger (debts are keyed by player name, so
//! they live under this resource).

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/players", get(handler::list).post(handler::create))
        .route("/api/players/debts", get(handler::debts))
        .route("/api/players/debts/settle", post(handler::settle_debt))
        .route(
            "/api/players/{id}",
            put(handler::update).delete(handler::remove),
        )
}
