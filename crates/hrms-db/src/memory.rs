//! In-process credential store
//!
//! Backs `memory://` deployments and tests. Each operation touches one
//! `DashMap` shard under its lock, so per-key operations are atomic and
//! different keys proceed independently. Contents are lost on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use hrms_core::entities::{PairingEntry, Session};
use hrms_core::traits::{PairingRepository, RepoResult, SessionRepository};

/// In-memory pairing code and session store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    pairings: DashMap<String, PairingEntry>,
    sessions: DashMap<String, Session>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outstanding pairing codes
    pub fn pairing_count(&self) -> usize {
        self.pairings.len()
    }

    /// Number of stored sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[async_trait]
impl PairingRepository for MemoryCredentialStore {
    async fn get(&self, code: &str) -> RepoResult<Option<PairingEntry>> {
        Ok(self.pairings.get(code).map(|e| e.value().clone()))
    }

    async fn put(&self, entry: &PairingEntry) -> RepoResult<()> {
        self.pairings
            .insert(entry.code.as_str().to_string(), entry.clone());
        Ok(())
    }

    async fn insert_new(&self, entry: &PairingEntry) -> RepoResult<bool> {
        match self.pairings.entry(entry.code.as_str().to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(entry.clone());
                Ok(true)
            }
        }
    }

    async fn take(&self, code: &str) -> RepoResult<Option<PairingEntry>> {
        Ok(self.pairings.remove(code).map(|(_, entry)| entry))
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let mut removed = 0u64;
        self.pairings.retain(|_, entry| {
            let keep = entry.created_at >= cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }
}

#[async_trait]
impl SessionRepository for MemoryCredentialStore {
    async fn get(&self, session_id: &str) -> RepoResult<Option<Session>> {
        Ok(self.sessions.get(session_id).map(|s| s.value().clone()))
    }

    async fn put(&self, session: &Session) -> RepoResult<()> {
        self.sessions
            .insert(session.session_id.clone(), session.clone());
        Ok(())
    }
}
