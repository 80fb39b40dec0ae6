//! Ticket lifecycle: submission, listing, status changes, deletion.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::store::TicketRepository;
use crate::ticket::{validate_new_ticket, NewTicket, NewTicketRecord, Ticket, TicketStatus};
use crate::types::DbId;

pub struct TicketStore {
    repo: Arc<dyn TicketRepository>,
    clock: Arc<dyn Clock>,
}

impl TicketStore {
    pub fn new(repo: Arc<dyn TicketRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Validate and persist a submission. Status is always `open` and the
    /// creation time is the clock's current reading.
    pub async fn create(&self, input: NewTicket) -> CoreResult<Ticket> {
        validate_new_ticket(&input)?;

        let ticket = self
            .repo
            .insert(NewTicketRecord {
                ticket: input,
                status: TicketStatus::Open,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            ticket_id = ticket.id,
            category = %ticket.category,
            images = ticket.images.len(),
            "Ticket created"
        );
        Ok(ticket)
    }

    /// Every ticket. Ordering is left to the caller.
    pub async fn list_all(&self) -> CoreResult<Vec<Ticket>> {
        self.repo.list_all().await
    }

    /// Tickets reported by `email` (exact match), newest first.
    pub async fn list_by_reporter(&self, email: &str) -> CoreResult<Vec<Ticket>> {
        let mut tickets = self.repo.list_by_reporter(email).await?;
        tickets.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(tickets)
    }

    pub async fn find(&self, id: DbId) -> CoreResult<Option<Ticket>> {
        self.repo.find(id).await
    }

    /// Set a ticket's status. Any status may follow any other.
    pub async fn update_status(&self, id: Option<DbId>, status: TicketStatus) -> CoreResult<Ticket> {
        let id = id.ok_or(CoreError::MissingIdentifier("ticket id"))?;
        let ticket = self
            .repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| CoreError::not_found("ticket", id))?;

        tracing::info!(ticket_id = id, %status, "Ticket status updated");
        Ok(ticket)
    }

    /// Remove a ticket. Deleting an id that does not exist still succeeds.
    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        if self.repo.delete(id).await? {
            tracing::info!(ticket_id = id, "Ticket deleted");
        } else {
            tracing::debug!(ticket_id = id, "Delete of absent ticket ignored");
        }
        Ok(())
    }

    pub async fn ping(&self) -> CoreResult<()> {
        self.repo.ping().await
    }
}
