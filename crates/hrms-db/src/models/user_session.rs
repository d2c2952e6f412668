//! User session database model

use sqlx::FromRow;

/// Database model for user_sessions table
#[derive(Debug, Clone, FromRow)]
pub struct UserSessionModel {
    pub session_id: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}
