//! `earlybird` HTTP server.
//!
//! Wires the core signup workflow and lead store into a running Axum
//! server. Serves the landing page at `/` and the JSON API at `/v1/*`.

pub mod config;
pub mod error;
pub mod notify;
pub mod routes;
pub mod state;
