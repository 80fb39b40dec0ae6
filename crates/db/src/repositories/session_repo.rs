//! Repository for the `admin_sessions` table.

use helpdesk_core::session::NewSession;
use helpdesk_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::session::AdminSessionRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token_hash, admin_id, expires_at, created_at, updated_at";

/// Provides CRUD operations for admin sessions.
pub struct AdminSessionRepo;

impl AdminSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewSession) -> Result<AdminSessionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions (token_hash, admin_id, created_at, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSessionRow>(&query)
            .bind(&input.token_hash)
            .bind(input.admin_id)
            .bind(input.created_at)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by token hash, expired or not.
    ///
    /// Expiry is judged by the caller's clock, not `NOW()`.
    pub async fn find_by_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<AdminSessionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_sessions WHERE token_hash = $1");
        sqlx::query_as::<_, AdminSessionRow>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a single session. Returns `true` if a row was removed.
    pub async fn delete_by_token_hash(pool: &PgPool, hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions expired as of `now`. Returns the count of deleted rows.
    pub async fn delete_expired(pool: &PgPool, now: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
