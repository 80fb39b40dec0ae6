//! Repository for the `admins` table.

use sqlx::PgPool;

use crate::models::admin::AdminRow;

const COLUMNS: &str = "id, email, password_hash, created_at, updated_at";

pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new admin, returning the created row.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (email, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminRow>(&query)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an admin by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<AdminRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE email = $1");
        sqlx::query_as::<_, AdminRow>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
