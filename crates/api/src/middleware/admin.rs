//! Admin-session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use helpdesk_core::access::{AdminGate, AdminSessionContext, GateState};
use helpdesk_core::error::CoreError;
use helpdesk_core::types::DbId;

use crate::error::AppError;
use crate::middleware::bearer_token;
use crate::state::AppState;

/// An admin whose Bearer token is a live session.
///
/// Rejects with 401 and the gate's notice when the token is missing,
/// unknown, or expired:
///
/// ```ignore
/// async fn list(_admin: AdminSession, State(state): State<AppState>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The admin the session was opened for, when recorded.
    pub admin_id: Option<DbId>,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut ctx = AdminSessionContext::new(bearer_token(parts)?);

        match AdminGate::check(&mut ctx, &state.sessions).await? {
            GateState::Authenticated(access) => Ok(AdminSession {
                admin_id: access.admin_id,
            }),
            GateState::Unauthenticated { notice, .. } => {
                Err(AppError::Core(CoreError::Unauthorized(notice.into())))
            }
            // Session validation is synchronous with the store; it never
            // reports a pending state.
            GateState::Loading => Err(AppError::Core(CoreError::Transient(
                "admin session check is pending".into(),
            ))),
        }
    }
}
