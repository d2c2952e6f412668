//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hrms_core::entities::Session;
use hrms_core::traits::{RepoResult, SessionRepository};

use crate::mappers::SessionUpsert;
use crate::models::UserSessionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self))]
    async fn get(&self, session_id: &str) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, UserSessionModel>(
            r#"
            SELECT session_id, access_token, refresh_token
            FROM user_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self, session), fields(session_id = %session.session_id))]
    async fn put(&self, session: &Session) -> RepoResult<()> {
        let row = SessionUpsert::new(session);
        sqlx::query(
            r#"
            INSERT INTO user_sessions (session_id, access_token, refresh_token)
            VALUES ($1, $2, $3)
            ON CONFLICT (session_id) DO UPDATE
            SET access_token = EXCLUDED.access_token,
                refresh_token = EXCLUDED.refresh_token
            "#,
        )
        .bind(row.session_id)
        .bind(row.access_token)
        .bind(row.refresh_token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
