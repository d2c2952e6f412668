//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use hrms_common::{AppConfig, AppError, AppResult};
use hrms_db::CredentialStore;
use hrms_service::{ServiceContext, ServiceContextBuilder, ToolRegistry};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, development_cors, request_timeout};
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let timeout = request_timeout(&state.config().upstream);
    let mut router = create_router();
    if state.config().app.env.is_development() {
        router = router.layer(development_cors());
    }
    let router = apply_middleware(router, timeout);
    router.with_state(state)
}

/// Build the service context on top of an already connected store
pub fn create_service_context(
    config: &AppConfig,
    store: &CredentialStore,
) -> AppResult<ServiceContext> {
    ServiceContextBuilder::new()
        .pairing_repo(store.pairing_repo())
        .session_repo(store.session_repo())
        .upstream_config(&config.upstream)
        .and_then(|builder| {
            builder
                .pairing_config(config.pairing.clone())
                .session_config(config.session.clone())
                .build()
        })
        .map_err(AppError::config)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let store = CredentialStore::connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    create_app_state_with_store(config, store)
}

/// Create AppState over a given store
pub fn create_app_state_with_store(
    config: AppConfig,
    store: CredentialStore,
) -> AppResult<AppState> {
    let service_context = create_service_context(&config, &store)?;
    info!(
        store = store.backend(),
        upstream = %config.upstream.base_url,
        session = ?config.session.identity,
        "Service context ready"
    );
    Ok(AppState::new(
        service_context,
        ToolRegistry::with_defaults(),
        store,
        config,
    ))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
