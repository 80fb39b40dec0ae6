//! Route definitions for admin sessions.
//!
//! Mounted at `/auth` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /login     -> login
/// POST /logout    -> logout
/// POST /validate  -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/validate", post(auth::validate))
}
