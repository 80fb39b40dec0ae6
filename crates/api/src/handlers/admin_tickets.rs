//! Handlers for the admin ticket dashboard.
//!
//! All endpoints require a live admin session ([`AdminSession`]).

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use helpdesk_core::dashboard::{
    category_counts, daily_counts, CategoryCount, DailyCount, StatusCounts, TicketFilter,
};
use helpdesk_core::error::CoreError;
use helpdesk_core::export::tickets_to_csv;
use helpdesk_core::ticket::{Ticket, TicketStatus};
use helpdesk_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminSession;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Dashboard filter parameters. All optional.
#[derive(Debug, Default, Deserialize)]
pub struct TicketListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    /// Free-text search over title, id and reporter.
    pub q: Option<String>,
}

impl TicketListParams {
    fn into_filter(self) -> AppResult<TicketFilter> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(s) => Some(s.parse::<TicketStatus>()?),
        };
        let category = self
            .category
            .filter(|c| !c.is_empty() && c != "all");
        Ok(TicketFilter {
            status,
            category,
            search: self.q,
        })
    }
}

/// Query parameters for `GET /admin/tickets/export`.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
    #[serde(flatten)]
    pub filter: TicketListParams,
}

/// Request body for `PATCH /admin/tickets/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: Option<DbId>,
    pub status: String,
}

/// Dashboard aggregates over every ticket.
#[derive(Debug, Serialize)]
pub struct TicketStats {
    pub counts: StatusCounts,
    pub by_day: Vec<DailyCount>,
    pub by_category: Vec<CategoryCount>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every ticket matching `filter`, newest first.
async fn filtered_tickets(state: &AppState, filter: &TicketFilter) -> AppResult<Vec<Ticket>> {
    let mut tickets = filter.apply(state.tickets.list_all().await?);
    tickets.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    Ok(tickets)
}

// ---------------------------------------------------------------------------
// GET /admin/tickets
// ---------------------------------------------------------------------------

/// List tickets with optional status, category and search filters.
pub async fn list_tickets(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<TicketListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let tickets = filtered_tickets(&state, &filter).await?;
    Ok(Json(DataResponse { data: tickets }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/tickets/status
// ---------------------------------------------------------------------------

/// Move a ticket to any status.
pub async fn update_status(
    admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let id = input.id.ok_or(CoreError::MissingIdentifier("ticket id"))?;
    let status: TicketStatus = input.status.parse()?;

    let ticket = state.tickets.update_status(Some(id), status).await?;

    tracing::info!(
        ticket_id = id,
        status = %status,
        admin_id = ?admin.admin_id,
        "Admin changed ticket status",
    );

    Ok(Json(DataResponse { data: ticket }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/tickets/{id}
// ---------------------------------------------------------------------------

/// Delete a ticket. Succeeds whether or not the ticket existed.
pub async fn delete_ticket(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.tickets.delete(id).await?;
    tracing::info!(ticket_id = id, admin_id = ?admin.admin_id, "Admin deleted ticket");
    Ok(Json(SuccessResponse::OK))
}

// ---------------------------------------------------------------------------
// GET /admin/tickets/stats
// ---------------------------------------------------------------------------

/// Status counts plus per-day and per-category breakdowns.
pub async fn ticket_stats(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tickets = state.tickets.list_all().await?;
    Ok(Json(DataResponse {
        data: TicketStats {
            counts: StatusCounts::tally(&tickets),
            by_day: daily_counts(&tickets),
            by_category: category_counts(&tickets),
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /admin/tickets/export
// ---------------------------------------------------------------------------

/// GET /admin/tickets/export?format=csv|json&status=..&category=..&q=..
///
/// Export the filtered ticket list. CSV unless `format=json`.
pub async fn export_tickets(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<axum::response::Response> {
    let filter = params.filter.into_filter()?;
    let tickets = filtered_tickets(&state, &filter).await?;

    match params.format.as_deref().unwrap_or("csv") {
        "csv" => Ok((
            [
                (CONTENT_TYPE, "text/csv; charset=utf-8"),
                (CONTENT_DISPOSITION, "attachment; filename=\"tickets.csv\""),
            ],
            tickets_to_csv(&tickets),
        )
            .into_response()),
        "json" => Ok(Json(DataResponse { data: tickets }).into_response()),
        other => Err(AppError::BadRequest(format!(
            "Unsupported export format '{other}'. Expected csv or json"
        ))),
    }
}
