//! Core server plumbing: configuration, shared state, HTTP server

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::{Server, build_router};
pub use state::ServerState;
