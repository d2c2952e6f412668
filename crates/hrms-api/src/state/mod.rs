//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, the tool registry and configuration.

use std::sync::Arc;

use hrms_common::AppConfig;
use hrms_db::CredentialStore;
use hrms_service::{ServiceContext, ToolRegistry};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Tools callable through `/tools/:name`
    tools: Arc<ToolRegistry>,
    /// Store backend, kept for readiness probes
    store: CredentialStore,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        tools: ToolRegistry,
        store: CredentialStore,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            tools: Arc::new(tools),
            store,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the tool registry
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Get the credential store
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("tools", &self.tools)
            .field("store", &self.store.backend())
            .field("config", &"AppConfig")
            .finish()
    }
}
