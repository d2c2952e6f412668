//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{connect, health, tools};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(connect_routes())
        .merge(tool_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Pairing page served to the user's browser
fn connect_routes() -> Router<AppState> {
    Router::new().route(
        "/connect",
        get(connect::connect_page).post(connect::handle_connect),
    )
}

/// Assistant-facing tool routes
fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/tools", get(tools::list_tools))
        .route("/tools/:name", post(tools::invoke_tool))
}
