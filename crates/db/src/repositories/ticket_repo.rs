//! Repository for the `tickets` table.

use helpdesk_core::ticket::NewTicketRecord;
use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::ticket::TicketRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, reporter_name, reporter_email, reporter_contact, title, category, \
                       description, images, status, created_at, updated_at";

/// Provides CRUD operations for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Insert a ticket, returning the created row.
    ///
    /// `status` and `created_at` come from the record rather than column
    /// defaults so the caller's clock is authoritative.
    pub async fn create(pool: &PgPool, input: &NewTicketRecord) -> Result<TicketRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets
                (reporter_name, reporter_email, reporter_contact, title, category,
                 description, images, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(&input.ticket.reporter_name)
            .bind(&input.ticket.reporter_email)
            .bind(&input.ticket.reporter_contact)
            .bind(&input.ticket.title)
            .bind(&input.ticket.category)
            .bind(&input.ticket.description)
            .bind(&input.ticket.images)
            .bind(input.status.as_str())
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// All tickets, in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets ORDER BY id");
        sqlx::query_as::<_, TicketRow>(&query).fetch_all(pool).await
    }

    /// Tickets for one reporter email (case-sensitive), newest first.
    pub async fn list_by_reporter(
        pool: &PgPool,
        email: &str,
    ) -> Result<Vec<TicketRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets
             WHERE reporter_email = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TicketRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a ticket's status. Returns `None` if the id does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<TicketRow>, sqlx::Error> {
        let query = format!("UPDATE tickets SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a ticket. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
