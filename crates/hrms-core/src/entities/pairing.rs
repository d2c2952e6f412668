//! Pairing entry - bridges a password login to a durable session

use chrono::{DateTime, Duration, Utc};

use crate::entities::TokenSet;
use crate::value_objects::PairingCode;

/// One-time pairing entry keyed by its code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingEntry {
    pub code: PairingCode,
    pub token_set: TokenSet,
    pub created_at: DateTime<Utc>,
}

impl PairingEntry {
    /// Create a new PairingEntry stamped with the current time
    pub fn new(code: PairingCode, token_set: TokenSet) -> Self {
        Self {
            code,
            token_set,
            created_at: Utc::now(),
        }
    }

    /// Check if the entry is older than `ttl` at `now`. `None` never expires,
    /// and neither does a deadline past the representable range.
    pub fn is_expired_at(&self, ttl: Option<Duration>, now: DateTime<Utc>) -> bool {
        ttl.and_then(|ttl| self.created_at.checked_add_signed(ttl))
            .is_some_and(|deadline| now > deadline)
    }

    /// Check if the entry is expired right now
    pub fn is_expired(&self, ttl: Option<Duration>) -> bool {
        self.is_expired_at(ttl, Utc::now())
    }
}
