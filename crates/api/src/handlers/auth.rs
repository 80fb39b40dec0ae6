//! Handlers for admin session endpoints.
//!
//! Login failures keep the `{ "success": false, ... }` shape the admin login
//! form expects instead of the generic error envelope.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::session::SessionValidation;
use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub admin_id: DbId,
    pub expires_at: Timestamp,
}

/// Failed login payload.
#[derive(Debug, Serialize)]
pub struct LoginFailure {
    pub success: bool,
    pub error: &'static str,
    pub code: &'static str,
}

/// Request body for `POST /auth/logout` and `POST /auth/validate`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

// ---------------------------------------------------------------------------
// POST /auth/login
// ---------------------------------------------------------------------------

/// Authenticate an admin by email and password and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    let failure = |error, code| {
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginFailure {
                success: false,
                error,
                code,
            }),
        )
            .into_response()
    };

    match state.sessions.login(&input.email, &input.password).await {
        Ok(issued) => {
            tracing::info!(admin_id = issued.admin_id, email = %input.email, "Admin logged in");
            Ok(Json(LoginResponse {
                success: true,
                token: issued.token,
                admin_id: issued.admin_id,
                expires_at: issued.expires_at,
            })
            .into_response())
        }
        Err(CoreError::NotFound { .. }) => {
            tracing::info!(email = %input.email, "Admin login rejected: unknown email");
            Ok(failure("Admin not found", "NOT_FOUND"))
        }
        Err(CoreError::InvalidCredential) => {
            tracing::info!(email = %input.email, "Admin login rejected: wrong password");
            Ok(failure("Invalid password", "INVALID_CREDENTIAL"))
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// POST /auth/logout
// ---------------------------------------------------------------------------

/// End a session. Unknown or already-ended tokens succeed too.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<TokenRequest>,
) -> AppResult<impl IntoResponse> {
    state.sessions.logout(&input.token).await?;
    Ok(Json(SuccessResponse::OK))
}

// ---------------------------------------------------------------------------
// POST /auth/validate
// ---------------------------------------------------------------------------

/// Report whether a token names a live session.
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<TokenRequest>,
) -> AppResult<Json<SessionValidation>> {
    let validation = state.sessions.validate(&input.token).await?;
    Ok(Json(validation))
}
