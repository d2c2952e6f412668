//! Token set and upstream token grant parsing

use serde::Deserialize;
use std::fmt;

use crate::error::DomainError;

/// Bearer/refresh credential pair held by exactly one pairing entry or session
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl TokenSet {
    /// Create a new TokenSet
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
        }
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Tokens returned by the upstream login or refresh endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access: String,
    pub refresh: Option<String>,
}

impl TokenGrant {
    /// Token set as issued, used after a password login
    pub fn into_token_set(self) -> TokenSet {
        TokenSet::new(self.access, self.refresh)
    }

    /// Token set after a refresh. Upstream rotation is optional, so the
    /// previous refresh token is kept when the grant omits one.
    pub fn rotate(self, previous_refresh: Option<String>) -> TokenSet {
        TokenSet::new(self.access, self.refresh.or(previous_refresh))
    }
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access", &"<redacted>")
            .field("refresh", &self.refresh.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Wire shape: the access token arrives under `access` or `token`.
#[derive(Deserialize)]
struct RawGrant {
    #[serde(default)]
    access: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    refresh: Option<String>,
}

/// Parse an upstream token response body into a typed grant
///
/// `access` wins over `token` when both are present. Empty strings count as absent.
pub fn parse_token_grant(body: &str) -> Result<TokenGrant, DomainError> {
    let raw: RawGrant = serde_json::from_str(body)
        .map_err(|e| DomainError::InvalidTokenResponse(e.to_string()))?;

    let access = raw
        .access
        .filter(|s| !s.is_empty())
        .or(raw.token.filter(|s| !s.is_empty()))
        .ok_or_else(|| DomainError::InvalidTokenResponse("missing access token".to_string()))?;

    Ok(TokenGrant {
        access,
        refresh: raw.refresh.filter(|s| !s.is_empty()),
    })
}
