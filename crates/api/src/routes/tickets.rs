//! Route definitions for the employee ticket portal.
//!
//! Mounted at `/tickets` by `api_routes()`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::tickets;
use crate::state::AppState;

/// ```text
/// POST   /               -> create_ticket
/// GET    /mine           -> list_my_tickets
/// GET    /mine/summary   -> my_ticket_summary
/// DELETE /{id}           -> delete_my_ticket
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tickets::create_ticket))
        .route("/mine", get(tickets::list_my_tickets))
        .route("/mine/summary", get(tickets::my_ticket_summary))
        .route("/{id}", delete(tickets::delete_my_ticket))
}
