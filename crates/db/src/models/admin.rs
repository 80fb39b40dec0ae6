//! Admin row model. Contains the password hash; never serialize it.

use helpdesk_core::admin::AdminCredential;
use helpdesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct AdminRow {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AdminRow> for AdminCredential {
    fn from(row: AdminRow) -> Self {
        AdminCredential {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}
