//! Employee identity extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use helpdesk_core::access::{employee_gate, GateState};
use helpdesk_core::error::CoreError;
use helpdesk_core::identity::EmployeeIdentity;

use crate::error::AppError;
use crate::middleware::bearer_token;
use crate::state::AppState;

/// The signed-in employee, as reported by the identity provider.
#[derive(Debug, Clone)]
pub struct EmployeeUser(pub EmployeeIdentity);

impl FromRequestParts<AppState> for EmployeeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let identity = state.identity.resolve(token.as_deref()).await;

        match employee_gate(&identity) {
            GateState::Authenticated(employee) => Ok(EmployeeUser(employee)),
            GateState::Unauthenticated { notice, .. } => {
                Err(AppError::Core(CoreError::Unauthorized(notice.into())))
            }
            GateState::Loading => Err(AppError::Core(CoreError::Transient(
                "identity provider has not settled".into(),
            ))),
        }
    }
}
