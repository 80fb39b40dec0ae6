//! Handlers for the employee ticket portal.
//!
//! Every endpoint requires a signed-in employee. Listing is scoped to the
//! employee's primary email.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use helpdesk_core::dashboard::StatusCounts;
use helpdesk_core::error::CoreError;
use helpdesk_core::ticket::NewTicket;
use helpdesk_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::employee::EmployeeUser;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /tickets
// ---------------------------------------------------------------------------

/// Submit a new ticket. Status and creation time are set by the store.
pub async fn create_ticket(
    EmployeeUser(employee): EmployeeUser,
    State(state): State<AppState>,
    Json(input): Json<NewTicket>,
) -> AppResult<impl IntoResponse> {
    let ticket = state.tickets.create(input).await?;

    tracing::info!(
        ticket_id = ticket.id,
        employee_id = %employee.id,
        category = %ticket.category,
        "Ticket submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: ticket })))
}

// ---------------------------------------------------------------------------
// GET /tickets/mine
// ---------------------------------------------------------------------------

/// The caller's tickets, newest first.
pub async fn list_my_tickets(
    EmployeeUser(employee): EmployeeUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tickets = state
        .tickets
        .list_by_reporter(&employee.primary_email)
        .await?;
    Ok(Json(DataResponse { data: tickets }))
}

// ---------------------------------------------------------------------------
// GET /tickets/mine/summary
// ---------------------------------------------------------------------------

/// Status counts over the caller's tickets.
pub async fn my_ticket_summary(
    EmployeeUser(employee): EmployeeUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tickets = state
        .tickets
        .list_by_reporter(&employee.primary_email)
        .await?;
    Ok(Json(DataResponse {
        data: StatusCounts::tally(&tickets),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /tickets/{id}
// ---------------------------------------------------------------------------

/// Withdraw one of the caller's own tickets.
pub async fn delete_my_ticket(
    EmployeeUser(employee): EmployeeUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ticket = state
        .tickets
        .find(id)
        .await?
        .ok_or_else(|| CoreError::not_found("ticket", id))?;

    if ticket.reporter_email != employee.primary_email {
        return Err(CoreError::Forbidden("You can only delete your own tickets".into()).into());
    }

    state.tickets.delete(id).await?;
    tracing::info!(ticket_id = id, employee_id = %employee.id, "Ticket withdrawn");

    Ok(Json(SuccessResponse::OK))
}
