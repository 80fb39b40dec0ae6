pub mod admin;
pub mod auth;
pub mod health;
pub mod tickets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth
///     POST   /login                 admin login
///     POST   /logout                end a session
///     POST   /validate              check a session token
///
/// /tickets                          (employee)
///     POST   /                      submit
///     GET    /mine                  own tickets, newest first
///     GET    /mine/summary          own status counts
///     DELETE /{id}                  withdraw own ticket
///
/// /admin/tickets                    (admin session)
///     GET    /                      filtered list
///     PATCH  /status                change status
///     GET    /stats                 dashboard aggregates
///     GET    /export                CSV / JSON export
///     DELETE /{id}                  delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tickets", tickets::router())
        .nest("/admin/tickets", admin::router())
}
