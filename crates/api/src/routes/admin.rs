//! Route definitions for the admin dashboard.
//!
//! Mounted at `/admin/tickets` by `api_routes()`.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::admin_tickets;
use crate::state::AppState;

/// ```text
/// GET    /         -> list_tickets
/// PATCH  /status   -> update_status
/// GET    /stats    -> ticket_stats
/// GET    /export   -> export_tickets
/// DELETE /{id}     -> delete_ticket
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_tickets::list_tickets))
        .route("/status", patch(admin_tickets::update_status))
        .route("/stats", get(admin_tickets::ticket_stats))
        .route("/export", get(admin_tickets::export_tickets))
        .route("/{id}", delete(admin_tickets::delete_ticket))
}
