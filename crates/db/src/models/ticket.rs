//! Ticket row model.

use helpdesk_core::error::CoreError;
use helpdesk_core::ticket::Ticket;
use helpdesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `tickets` table.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub id: DbId,
    pub reporter_name: String,
    pub reporter_email: String,
    pub reporter_contact: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = CoreError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(|_| {
            CoreError::Internal(format!(
                "ticket {} has unrecognised status '{}'",
                row.id, row.status
            ))
        })?;
        Ok(Ticket {
            id: row.id,
            reporter_name: row.reporter_name,
            reporter_email: row.reporter_email,
            reporter_contact: row.reporter_contact,
            title: row.title,
            category: row.category,
            description: row.description,
            images: row.images,
            status,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use helpdesk_core::ticket::TicketStatus;

    use super::*;

    fn row(status: &str) -> TicketRow {
        TicketRow {
            id: 3,
            reporter_name: "Asha".into(),
            reporter_email: "a@x.com".into(),
            reporter_contact: "555".into(),
            title: "Wifi".into(),
            category: "it".into(),
            description: "Drops every hour".into(),
            images: vec!["https://cdn.example.com/1.png".into()],
            status: status.into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn known_status_converts() {
        let ticket = Ticket::try_from(row("in-progress")).unwrap();
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.images.len(), 1);
    }

    #[test]
    fn unknown_status_is_internal_error() {
        assert!(matches!(
            Ticket::try_from(row("closed")),
            Err(CoreError::Internal(_))
        ));
    }
}
