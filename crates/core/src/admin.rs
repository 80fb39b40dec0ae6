//! Administrator credentials. Provisioned out-of-band, read-only at runtime.

use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub id: DbId,
    /// Unique; matched with exact, case-sensitive equality.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
}
