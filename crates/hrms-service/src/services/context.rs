//! Service context - dependency container for services
//!
//! Holds the credential store repositories, the upstream client, and the
//! pairing and session settings needed by services.

use std::sync::Arc;

use hrms_common::{PairingConfig, SessionConfig, UpstreamConfig};
use hrms_core::traits::{PairingRepository, SessionRepository};
use hrms_core::SessionIdentity;

use crate::upstream::UpstreamClient;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every service borrows it for the duration of one call.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    pairing_repo: Arc<dyn PairingRepository>,
    session_repo: Arc<dyn SessionRepository>,

    // Upstream
    upstream: UpstreamClient,

    // Settings
    pairing: PairingConfig,
    session: SessionConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pairing_repo: Arc<dyn PairingRepository>,
        session_repo: Arc<dyn SessionRepository>,
        upstream: UpstreamClient,
        pairing: PairingConfig,
        session: SessionConfig,
    ) -> Self {
        Self {
            pairing_repo,
            session_repo,
            upstream,
            pairing,
            session,
        }
    }

    // === Repositories ===

    /// Get the pairing code repository
    pub fn pairing_repo(&self) -> &dyn PairingRepository {
        self.pairing_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Upstream ===

    /// Get the upstream HR backend client
    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }

    // === Settings ===

    pub fn pairing_config(&self) -> &PairingConfig {
        &self.pairing
    }

    pub fn session_identity(&self) -> &SessionIdentity {
        &self.session.identity
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("upstream", &self.upstream.base_url())
            .field("pairing", &self.pairing)
            .field("session", &self.session)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pairing_repo: Option<Arc<dyn PairingRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    upstream: Option<UpstreamClient>,
    pairing: Option<PairingConfig>,
    session: SessionConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairing_repo(mut self, repo: Arc<dyn PairingRepository>) -> Self {
        self.pairing_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn upstream(mut self, client: UpstreamClient) -> Self {
        self.upstream = Some(client);
        self
    }

    /// Build the upstream client from its configuration
    ///
    /// # Errors
    /// Returns `ServiceError::Transport` if the HTTP client cannot be created
    pub fn upstream_config(mut self, config: &UpstreamConfig) -> ServiceResult<Self> {
        self.upstream = Some(UpstreamClient::new(config)?);
        Ok(self)
    }

    pub fn pairing_config(mut self, config: PairingConfig) -> Self {
        self.pairing = Some(config);
        self
    }

    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session = config;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns a validation error if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pairing_repo
                .ok_or_else(|| ServiceError::validation("pairing_repo is required"))?,
            self.session_repo
                .ok_or_else(|| ServiceError::validation("session_repo is required"))?,
            self.upstream
                .ok_or_else(|| ServiceError::validation("upstream is required"))?,
            self.pairing
                .ok_or_else(|| ServiceError::validation("pairing config is required"))?,
            self.session,
        ))
    }
}
