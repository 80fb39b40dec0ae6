//! Admin session row model.

use helpdesk_core::session::Session;
use helpdesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSessionRow {
    pub id: DbId,
    pub token_hash: String,
    pub admin_id: Option<DbId>,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AdminSessionRow> for Session {
    fn from(row: AdminSessionRow) -> Self {
        Session {
            id: row.id,
            token_hash: row.token_hash,
            admin_id: row.admin_id,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}
