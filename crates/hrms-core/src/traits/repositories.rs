//! Repository traits (ports) - define the interface for credential storage
//!
//! Pairing codes and sessions live in two independent namespaces: a pairing
//! code and a session id with the same string value never interact.
//! Every method is a single atomic store operation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{PairingEntry, Session};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Pairing Repository
// ============================================================================

#[async_trait]
pub trait PairingRepository: Send + Sync {
    /// Find a pairing entry without consuming it
    async fn get(&self, code: &str) -> RepoResult<Option<PairingEntry>>;

    /// Insert or overwrite a pairing entry
    async fn put(&self, entry: &PairingEntry) -> RepoResult<()>;

    /// Insert only if the code is free. Returns `false` on collision.
    async fn insert_new(&self, entry: &PairingEntry) -> RepoResult<bool>;

    /// Delete and return the entry in one step. At most one caller observes `Some`.
    async fn take(&self, code: &str) -> RepoResult<Option<PairingEntry>>;

    /// Delete entries created before `cutoff`, returning how many were removed
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find the session for an id
    async fn get(&self, session_id: &str) -> RepoResult<Option<Session>>;

    /// Upsert a session. The token set is replaced wholesale.
    async fn put(&self, session: &Session) -> RepoResult<()>;
}
