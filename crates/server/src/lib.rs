//! HTTP server for the agricultural advisory backend
//!
//! Wires the chat engine, agronomic advisory, market data, and value-chain
//! directory behind a REST API. All domain services are pure or
//! provider-backed; the server owns only transport and wiring.

pub mod http;
pub mod providers;
pub mod state;
pub mod vision;

pub use http::create_router;
pub use state::AppState;
