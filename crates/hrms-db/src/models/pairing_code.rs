//! Pairing code database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for pairing_codes table
#[derive(Debug, Clone, FromRow)]
pub struct PairingCodeModel {
    pub code: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}
