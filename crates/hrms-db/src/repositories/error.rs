//! Error handling utilities for repositories

use hrms_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Any failure talking to the store is terminal for the current operation.
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::error!(error = %e, "Credential store query failed");
    DomainError::StoreUnavailable(e.to_string())
}
