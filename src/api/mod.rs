// src/api/mod.rs
//! HTTP surface: the rendered page, its assets and the synergy session API.
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::configure_routes;
pub use state::AppState;
