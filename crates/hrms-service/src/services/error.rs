//! Service layer errors
//!
//! Wraps domain errors and adds the failures that only appear once the
//! upstream HR backend is involved.

use hrms_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Too many attempts, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("Upstream returned {status}")]
    Upstream { status: u16, body: String },

    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Upstream unreachable: {0}")]
    Transport(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Seconds suggested to the caller when upstream rate limits without a usable `Retry-After`
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::ValidationError(msg.into()))
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => Self::domain_status(e),
            Self::InvalidCredentials | Self::RefreshFailed(_) => 401,
            Self::RateLimited { .. } => 429,
            Self::Upstream { .. } | Self::Transport(_) => 502,
            Self::UnknownTool(_) => 404,
        }
    }

    /// HTTP status code for a bare domain error
    #[must_use]
    pub fn domain_status(err: &DomainError) -> u16 {
        match err {
            DomainError::ValidationError(_) | DomainError::InvalidOrExpiredCode => 400,
            DomainError::NotConnected | DomainError::SessionExpired => 401,
            DomainError::InvalidTokenResponse(_) => 502,
            DomainError::StoreUnavailable(_) | DomainError::CodeSpaceExhausted { .. } => 503,
        }
    }

    /// Get the error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::RefreshFailed(_) => "REFRESH_FAILED",
            Self::Transport(_) => "UPSTREAM_UNREACHABLE",
            Self::UnknownTool(_) => "UNKNOWN_TOOL",
        }
    }

    /// What the caller should do next, when there is something to do
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Domain(DomainError::NotConnected) => {
                Some("Not connected. Please use the 'get_connection_link' tool first.")
            }
            Self::Domain(DomainError::SessionExpired) | Self::RefreshFailed(_) => Some(
                "The HRMS session has expired. Use the 'get_connection_link' tool and pair again.",
            ),
            Self::Domain(DomainError::InvalidOrExpiredCode) => Some(
                "Ask the user for a fresh 6-digit Sync Code from the connection page.",
            ),
            Self::Domain(DomainError::ValidationError(_)) => {
                Some("Fix the arguments and call the tool again.")
            }
            Self::RateLimited { .. } => Some("Wait before trying again."),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport("request timed out".to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
