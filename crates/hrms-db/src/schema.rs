//! Schema bootstrap
//!
//! Two independent tables: `pairing_codes` (code → token pair + creation time)
//! and `user_sessions` (session id → token pair).
//!
//! Tables left behind by earlier deployments are kept and upgraded in place.
//! Those store `pairing_codes.created_at` as a zone-less `TIMESTAMP`, which is
//! converted to `TIMESTAMPTZ` using the server's time zone (the zone its
//! `CURRENT_TIMESTAMP` default was written in).

use sqlx::PgPool;
use tracing::info;

const CREATE_USER_SESSIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS user_sessions (
        session_id    TEXT PRIMARY KEY,
        access_token  TEXT NOT NULL,
        refresh_token TEXT
    )
"#;

const CREATE_PAIRING_CODES: &str = r#"
    CREATE TABLE IF NOT EXISTS pairing_codes (
        code          TEXT PRIMARY KEY,
        access_token  TEXT NOT NULL,
        refresh_token TEXT,
        created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const UPGRADE_PAIRING_CREATED_AT: &str = r#"
    DO $$
    BEGIN
        IF EXISTS (
            SELECT 1 FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = 'pairing_codes'
              AND column_name = 'created_at'
              AND data_type = 'timestamp without time zone'
        ) THEN
            ALTER TABLE pairing_codes
                ALTER COLUMN created_at TYPE TIMESTAMPTZ USING created_at::timestamptz;
        END IF;
    END
    $$
"#;

// Rows written without a timestamp would never expire
const BACKFILL_PAIRING_CREATED_AT: &str = r#"
    UPDATE pairing_codes SET created_at = now() WHERE created_at IS NULL
"#;

const CREATE_PAIRING_CREATED_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS pairing_codes_created_at_idx ON pairing_codes (created_at)
"#;

/// Create the credential tables if they do not exist, upgrading older ones
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [
        CREATE_USER_SESSIONS,
        CREATE_PAIRING_CODES,
        UPGRADE_PAIRING_CREATED_AT,
        BACKFILL_PAIRING_CREATED_AT,
        CREATE_PAIRING_CREATED_INDEX,
    ] {
        sqlx::raw_sql(statement).execute(pool).await?;
    }
    info!("Credential store schema ready");
    Ok(())
}
