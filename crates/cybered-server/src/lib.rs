//! cybered-server — HTTP surface for the cybered API.
//!
//! Wires the content store and password evaluator into an axum router.
//! Exposed as a library so integration tests can drive the router without
//! binding a socket.

pub mod api;
pub mod config;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
