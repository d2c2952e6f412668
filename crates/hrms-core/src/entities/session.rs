//! Session - durable holder of a caller's current token pair

use crate::entities::TokenSet;

/// Session entity, one per session id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub token_set: TokenSet,
}

impl Session {
    /// Create a new Session
    pub fn new(session_id: impl Into<String>, token_set: TokenSet) -> Self {
        Self {
            session_id: session_id.into(),
            token_set,
        }
    }

    /// Replace the held token set wholesale
    pub fn with_token_set(mut self, token_set: TokenSet) -> Self {
        self.token_set = token_set;
        self
    }
}
