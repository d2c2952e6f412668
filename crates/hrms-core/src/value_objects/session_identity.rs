//! Session identity policy - how a caller maps to a stored session

use crate::error::DomainError;

/// Session id used by single-tenant deployments
pub const DEFAULT_SESSION_ID: &str = "default";

/// Deployment-time choice of session addressing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIdentity {
    /// Every caller shares one session
    Fixed(String),
    /// Each caller supplies its own session id
    PerCaller,
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::Fixed(DEFAULT_SESSION_ID.to_string())
    }
}

impl SessionIdentity {
    /// Maximum accepted length of a caller-supplied session id
    pub const MAX_ID_LEN: usize = 128;

    /// Resolve the session id for a call
    ///
    /// In `Fixed` mode the caller id is ignored. In `PerCaller` mode it is required.
    pub fn resolve(&self, caller: Option<&str>) -> Result<String, DomainError> {
        match self {
            Self::Fixed(id) => Ok(id.clone()),
            Self::PerCaller => {
                let id = caller.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
                    DomainError::ValidationError("a session id is required".to_string())
                })?;
                if id.len() > Self::MAX_ID_LEN {
                    return Err(DomainError::ValidationError(format!(
                        "session id longer than {} characters",
                        Self::MAX_ID_LEN
                    )));
                }
                Ok(id.to_string())
            }
        }
    }

    /// Parse the `SESSION_MODE` setting
    pub fn from_mode(mode: &str, fixed_id: Option<String>) -> Option<Self> {
        match mode.to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed(
                fixed_id.unwrap_or_else(|| DEFAULT_SESSION_ID.to_string()),
            )),
            "per_caller" | "per-caller" => Some(Self::PerCaller),
            _ => None,
        }
    }
}
