//! Credential store selection
//!
//! Picks the backend from the connection string: `memory://` for the
//! in-process store, anything else is handed to PostgreSQL.

use std::sync::Arc;

use hrms_common::DatabaseConfig;
use hrms_core::error::DomainError;
use hrms_core::traits::{PairingRepository, SessionRepository};
use tracing::info;

use crate::memory::MemoryCredentialStore;
use crate::pool::{create_pool, PgPool, PoolConfig};
use crate::repositories::{PgPairingRepository, PgSessionRepository};
use crate::schema::ensure_schema;

/// Connection string prefix selecting the in-process store
pub const MEMORY_URL_SCHEME: &str = "memory://";

/// Configured credential store backend
#[derive(Clone)]
pub enum CredentialStore {
    Postgres(PgPool),
    Memory(Arc<MemoryCredentialStore>),
}

impl CredentialStore {
    /// Connect to the store named by the configuration and prepare its schema
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        if config.url.starts_with(MEMORY_URL_SCHEME) {
            info!("Using in-memory credential store");
            return Ok(Self::memory());
        }

        info!("Connecting to PostgreSQL...");
        let pool = create_pool(&PoolConfig::from(config))
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        ensure_schema(&pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        info!("PostgreSQL connection established");

        Ok(Self::Postgres(pool))
    }

    /// Fresh, empty in-process store
    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryCredentialStore::new()))
    }

    /// Repository for the pairing code namespace
    pub fn pairing_repo(&self) -> Arc<dyn PairingRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgPairingRepository::new(pool.clone())),
            Self::Memory(store) => Arc::clone(store) as Arc<dyn PairingRepository>,
        }
    }

    /// Repository for the session namespace
    pub fn session_repo(&self) -> Arc<dyn SessionRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgSessionRepository::new(pool.clone())),
            Self::Memory(store) => Arc::clone(store) as Arc<dyn SessionRepository>,
        }
    }

    /// Backend name for logs and readiness output
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Check that the store answers
    pub async fn health_check(&self) -> Result<(), DomainError> {
        match self {
            Self::Postgres(pool) => sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .map(|_| ())
                .map_err(|e| DomainError::StoreUnavailable(e.to_string())),
            Self::Memory(_) => Ok(()),
        }
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("backend", &self.backend())
            .finish()
    }
}
