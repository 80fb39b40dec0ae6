//! Admin session records and the validity rule.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Lifetime of an admin session, in hours.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 6;

/// A persisted admin session. The bearer token itself is never stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: DbId,
    pub token_hash: String,
    pub admin_id: Option<DbId>,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Session {
    /// A session is live while `now` is strictly before `expires_at`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub token_hash: String,
    pub admin_id: Option<DbId>,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

/// Result of validating a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<DbId>,
}

impl SessionValidation {
    pub const fn invalid() -> Self {
        Self {
            valid: false,
            admin_id: None,
        }
    }
}

/// A freshly issued session: the plaintext token goes to the client once.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub admin_id: DbId,
    pub expires_at: Timestamp,
}
