//! # hrms-api
//!
//! HTTP server built with Axum: the pairing page, tool endpoints and
//! health probes.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with_store, run};
pub use state::AppState;
