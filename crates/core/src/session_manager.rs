//! Administrator login, session validation, and logout.
//!
//! Sessions are opaque bearer tokens with a fixed lifetime (6 hours by
//! default). Expired rows are left in place on validation; they disappear on
//! logout or through [`SessionManager::purge_expired`].

use std::sync::Arc;

use chrono::Duration;

use crate::auth::password::verify_password;
use crate::auth::token::{generate_session_token, hash_session_token};
use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::session::{IssuedSession, NewSession, SessionValidation, DEFAULT_SESSION_TTL_HOURS};
use crate::store::{AdminRepository, SessionRepository};

pub struct SessionManager {
    admins: Arc<dyn AdminRepository>,
    sessions: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        sessions: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admins,
            sessions,
            clock,
            ttl: Duration::hours(DEFAULT_SESSION_TTL_HOURS),
        }
    }

    /// Override the session lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Authenticate an admin and open a session.
    ///
    /// Fails with [`CoreError::NotFound`] when no admin has exactly this
    /// email, and [`CoreError::InvalidCredential`] when the password does not
    /// verify. No session row is written on failure.
    pub async fn login(&self, email: &str, password: &str) -> CoreResult<IssuedSession> {
        let admin = self
            .admins
            .find_by_email(email)
            .await?
            .ok_or_else(|| CoreError::not_found("admin", email))?;

        if !verify_password(password, &admin.password_hash)? {
            tracing::warn!(admin_id = admin.id, "Admin login rejected: invalid password");
            return Err(CoreError::InvalidCredential);
        }

        let token = generate_session_token();
        let created_at = self.clock.now();
        let expires_at = created_at + self.ttl;

        self.sessions
            .create(NewSession {
                token_hash: hash_session_token(&token),
                admin_id: Some(admin.id),
                created_at,
                expires_at,
            })
            .await?;

        tracing::info!(admin_id = admin.id, %expires_at, "Admin session issued");

        Ok(IssuedSession {
            token,
            admin_id: admin.id,
            expires_at,
        })
    }

    /// Check a bearer token. Absent and expired sessions are both invalid;
    /// an expired row is not deleted here.
    pub async fn validate(&self, token: &str) -> CoreResult<SessionValidation> {
        let Some(session) = self
            .sessions
            .find_by_token_hash(&hash_session_token(token))
            .await?
        else {
            return Ok(SessionValidation::invalid());
        };

        if session.is_expired(self.clock.now()) {
            tracing::debug!(session_id = session.id, "Session expired");
            return Ok(SessionValidation::invalid());
        }

        Ok(SessionValidation {
            valid: true,
            admin_id: session.admin_id,
        })
    }

    /// Revoke a session. Succeeds whether or not the token was known.
    pub async fn logout(&self, token: &str) -> CoreResult<()> {
        let removed = self
            .sessions
            .delete_by_token_hash(&hash_session_token(token))
            .await?;
        if removed {
            tracing::info!("Admin session revoked");
        }
        Ok(())
    }

    /// Delete every session that has expired as of now.
    pub async fn purge_expired(&self) -> CoreResult<u64> {
        self.sessions.delete_expired(self.clock.now()).await
    }
}
