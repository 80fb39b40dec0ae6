//! [`PgStore`]: the core repository traits over a PostgreSQL pool.

use async_trait::async_trait;
use helpdesk_core::admin::{AdminCredential, NewAdmin};
use helpdesk_core::error::{CoreError, CoreResult};
use helpdesk_core::session::{NewSession, Session};
use helpdesk_core::store::{AdminRepository, SessionRepository, TicketRepository};
use helpdesk_core::ticket::{NewTicketRecord, Ticket, TicketStatus};
use helpdesk_core::types::{DbId, Timestamp};

use crate::repositories::{AdminRepo, AdminSessionRepo, TicketRepo};
use crate::DbPool;

/// Cheaply cloneable handle; the pool is reference counted internally.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error into the core taxonomy.
///
/// Unique violations on `uq_` constraints are caller mistakes; everything
/// else is reported as a transient persistence failure.
fn store_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return CoreError::Validation(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Transient(err.to_string())
}

#[async_trait]
impl TicketRepository for PgStore {
    async fn insert(&self, record: NewTicketRecord) -> CoreResult<Ticket> {
        TicketRepo::create(&self.pool, &record)
            .await
            .map_err(store_error)?
            .try_into()
    }

    async fn list_all(&self) -> CoreResult<Vec<Ticket>> {
        TicketRepo::list(&self.pool)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Ticket::try_from)
            .collect()
    }

    async fn list_by_reporter(&self, email: &str) -> CoreResult<Vec<Ticket>> {
        TicketRepo::list_by_reporter(&self.pool, email)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Ticket::try_from)
            .collect()
    }

    async fn find(&self, id: DbId) -> CoreResult<Option<Ticket>> {
        TicketRepo::find_by_id(&self.pool, id)
            .await
            .map_err(store_error)?
            .map(Ticket::try_from)
            .transpose()
    }

    async fn update_status(&self, id: DbId, status: TicketStatus) -> CoreResult<Option<Ticket>> {
        TicketRepo::update_status(&self.pool, id, status.as_str())
            .await
            .map_err(store_error)?
            .map(Ticket::try_from)
            .transpose()
    }

    async fn delete(&self, id: DbId) -> CoreResult<bool> {
        TicketRepo::delete(&self.pool, id).await.map_err(store_error)
    }

    async fn ping(&self) -> CoreResult<()> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}

#[async_trait]
impl AdminRepository for PgStore {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<AdminCredential>> {
        Ok(AdminRepo::find_by_email(&self.pool, email)
            .await
            .map_err(store_error)?
            .map(AdminCredential::from))
    }

    async fn create(&self, input: NewAdmin) -> CoreResult<AdminCredential> {
        AdminRepo::create(&self.pool, &input.email, &input.password_hash)
            .await
            .map(AdminCredential::from)
            .map_err(store_error)
    }
}

#[async_trait]
impl SessionRepository for PgStore {
    async fn create(&self, input: NewSession) -> CoreResult<Session> {
        AdminSessionRepo::create(&self.pool, &input)
            .await
            .map(Session::from)
            .map_err(store_error)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> CoreResult<Option<Session>> {
        Ok(AdminSessionRepo::find_by_token_hash(&self.pool, token_hash)
            .await
            .map_err(store_error)?
            .map(Session::from))
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> CoreResult<bool> {
        AdminSessionRepo::delete_by_token_hash(&self.pool, token_hash)
            .await
            .map_err(store_error)
    }

    async fn delete_expired(&self, now: Timestamp) -> CoreResult<u64> {
        AdminSessionRepo::delete_expired(&self.pool, now)
            .await
            .map_err(store_error)
    }
}
