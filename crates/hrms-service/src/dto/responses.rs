//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::ServiceError;
use crate::upstream::DownstreamResponse;

// ============================================================================
// Tool Responses
// ============================================================================

/// Outcome of one tool invocation
///
/// Failures are values, not transport errors: the assistant reads the
/// message and the hint and decides what to do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToolResult {
    Success {
        /// Upstream status, absent for tools answered locally
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        content: String,
    },
    Error {
        code: String,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl ToolResult {
    /// Answer produced without contacting upstream
    pub fn text(content: impl Into<String>) -> Self {
        Self::Success {
            status: None,
            content: content.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Text shown to the assistant, whichever the outcome
    pub fn content(&self) -> &str {
        match self {
            Self::Success { content, .. } => content,
            Self::Error { message, .. } => message,
        }
    }
}

impl From<DownstreamResponse> for ToolResult {
    fn from(response: DownstreamResponse) -> Self {
        Self::Success {
            status: Some(response.status),
            content: response.body,
        }
    }
}

impl From<ServiceError> for ToolResult {
    fn from(err: ServiceError) -> Self {
        Self::Error {
            code: err.error_code().to_string(),
            message: err.to_string(),
            hint: err.hint().map(str::to_string),
        }
    }
}

/// Tool as advertised to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Tool listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDescriptor>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// Store backend name
    pub store: String,
    pub store_status: String,
}

impl ReadinessResponse {
    pub fn ready(store_backend: &str, store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: store_backend.to_string(),
                store_status: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
