//! PostgreSQL implementation of PairingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use hrms_core::entities::PairingEntry;
use hrms_core::traits::{PairingRepository, RepoResult};

use crate::mappers::PairingCodeInsert;
use crate::models::PairingCodeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PairingRepository
#[derive(Clone)]
pub struct PgPairingRepository {
    pool: PgPool,
}

impl PgPairingRepository {
    /// Create a new PgPairingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PairingRepository for PgPairingRepository {
    #[instrument(skip(self, code))]
    async fn get(&self, code: &str) -> RepoResult<Option<PairingEntry>> {
        let result = sqlx::query_as::<_, PairingCodeModel>(
            r#"
            SELECT code, access_token, refresh_token, created_at
            FROM pairing_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PairingEntry::try_from).transpose()
    }

    #[instrument(skip(self, entry))]
    async fn put(&self, entry: &PairingEntry) -> RepoResult<()> {
        let row = PairingCodeInsert::new(entry);
        sqlx::query(
            r#"
            INSERT INTO pairing_codes (code, access_token, refresh_token, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (code) DO UPDATE
            SET access_token = EXCLUDED.access_token,
                refresh_token = EXCLUDED.refresh_token,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(row.code)
        .bind(row.access_token)
        .bind(row.refresh_token)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, entry))]
    async fn insert_new(&self, entry: &PairingEntry) -> RepoResult<bool> {
        let row = PairingCodeInsert::new(entry);
        let result = sqlx::query(
            r#"
            INSERT INTO pairing_codes (code, access_token, refresh_token, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(row.code)
        .bind(row.access_token)
        .bind(row.refresh_token)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self, code))]
    async fn take(&self, code: &str) -> RepoResult<Option<PairingEntry>> {
        // Single DELETE ... RETURNING: two concurrent takes cannot both see the row.
        let result = sqlx::query_as::<_, PairingCodeModel>(
            r#"
            DELETE FROM pairing_codes
            WHERE code = $1
            RETURNING code, access_token, refresh_token, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PairingEntry::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM pairing_codes WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
