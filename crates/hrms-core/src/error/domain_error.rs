//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Pairing Errors
    // =========================================================================
    /// Never minted, already redeemed, or past its lifetime. The three cases
    /// are deliberately indistinguishable.
    #[error("Invalid or expired code")]
    InvalidOrExpiredCode,

    #[error("No free pairing code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    // =========================================================================
    // Session Errors
    // =========================================================================
    #[error("Not connected")]
    NotConnected,

    #[error("Session expired")]
    SessionExpired,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidOrExpiredCode => "INVALID_OR_EXPIRED_CODE",
            Self::CodeSpaceExhausted { .. } => "CODE_SPACE_EXHAUSTED",
            Self::NotConnected => "NOT_CONNECTED",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTokenResponse(_) => "INVALID_TOKEN_RESPONSE",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
