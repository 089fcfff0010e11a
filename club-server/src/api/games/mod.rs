//! Game catalog API module

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/games", get(handler::list).post(handler::create))
        .route(
            "/api/games/{id}",
            put(handler::update).delete(handler::remove),
        )
        .route("/api/games/{id}/toggle", post(handler::toggle))
}
