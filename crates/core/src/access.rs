//! Access gates for protected views.
//!
//! Both gates produce a [`GateState`]. The employee gate defers entirely to
//! the identity provider. The admin gate owns the [`AdminSessionContext`]:
//! it is the only code that reads the held token or clears it after a
//! failed validation.

use crate::error::CoreResult;
use crate::identity::{EmployeeIdentity, IdentityState};
use crate::session_manager::SessionManager;
use crate::types::DbId;

pub const EMPLOYEE_LOGIN_PATH: &str = "/employee-login";
pub const ADMIN_LOGIN_PATH: &str = "/admin-login";

pub const EMPLOYEE_SIGN_IN_NOTICE: &str = "Please sign in to access this page.";
pub const ADMIN_NO_SESSION_NOTICE: &str = "No session found. Redirecting to login...";
pub const ADMIN_INVALID_SESSION_NOTICE: &str = "Session expired or invalid. Redirecting to login...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState<T> {
    /// Still waiting on the authority; show a neutral indicator.
    Loading,
    Unauthenticated {
        redirect_to: &'static str,
        notice: &'static str,
    },
    Authenticated(T),
}

/// Map the identity provider's state onto a gate decision.
pub fn employee_gate(state: &IdentityState) -> GateState<EmployeeIdentity> {
    match state {
        IdentityState::Loading => GateState::Loading,
        IdentityState::SignedOut => GateState::Unauthenticated {
            redirect_to: EMPLOYEE_LOGIN_PATH,
            notice: EMPLOYEE_SIGN_IN_NOTICE,
        },
        IdentityState::SignedIn(identity) => GateState::Authenticated(identity.clone()),
    }
}

/// The admin's locally held session.
#[derive(Debug, Clone, Default)]
pub struct AdminSessionContext {
    token: Option<String>,
}

impl AdminSessionContext {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// What an admin gate hands to the protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccess {
    pub admin_id: Option<DbId>,
}

pub struct AdminGate;

impl AdminGate {
    /// Validate the held token.
    ///
    /// No token redirects immediately. A token the session manager rejects
    /// is purged from `ctx` before redirecting.
    pub async fn check(
        ctx: &mut AdminSessionContext,
        sessions: &SessionManager,
    ) -> CoreResult<GateState<AdminAccess>> {
        let Some(token) = ctx.token.as_deref() else {
            return Ok(GateState::Unauthenticated {
                redirect_to: ADMIN_LOGIN_PATH,
                notice: ADMIN_NO_SESSION_NOTICE,
            });
        };

        let validation = sessions.validate(token).await?;
        if !validation.valid {
            ctx.token = None;
            return Ok(GateState::Unauthenticated {
                redirect_to: ADMIN_LOGIN_PATH,
                notice: ADMIN_INVALID_SESSION_NOTICE,
            });
        }

        Ok(GateState::Authenticated(AdminAccess {
            admin_id: validation.admin_id,
        }))
    }
}
