//! Persistence contract consumed by the Session Manager and Ticket Store.
//!
//! Each trait is a narrow document-store surface: insert with id
//! assignment, equality lookup on one field, patch by id, delete by id,
//! collect all. No validation happens here; callers own that.
//!
//! - [`memory::MemoryStore`] -- in-process implementation (tests, local dev).
//! - `helpdesk_db::PgStore` -- PostgreSQL implementation.

use async_trait::async_trait;

use crate::admin::{AdminCredential, NewAdmin};
use crate::error::CoreResult;
use crate::session::{NewSession, Session};
use crate::ticket::{NewTicketRecord, Ticket, TicketStatus};
use crate::types::{DbId, Timestamp};

pub mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a ticket. The store assigns an id that is never reused.
    async fn insert(&self, record: NewTicketRecord) -> CoreResult<Ticket>;

    /// Every ticket, in no guaranteed order.
    async fn list_all(&self) -> CoreResult<Vec<Ticket>>;

    /// Tickets whose reporter email exactly equals `email`.
    async fn list_by_reporter(&self, email: &str) -> CoreResult<Vec<Ticket>>;

    async fn find(&self, id: DbId) -> CoreResult<Option<Ticket>>;

    /// Overwrite the status. Returns `None` if no such ticket exists.
    async fn update_status(&self, id: DbId, status: TicketStatus) -> CoreResult<Option<Ticket>>;

    /// Remove a ticket. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> CoreResult<bool>;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Exact, case-sensitive email lookup.
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<AdminCredential>>;

    async fn create(&self, input: NewAdmin) -> CoreResult<AdminCredential>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, input: NewSession) -> CoreResult<Session>;

    async fn find_by_token_hash(&self, token_hash: &str) -> CoreResult<Option<Session>>;

    /// Returns `true` if a row was deleted.
    async fn delete_by_token_hash(&self, token_hash: &str) -> CoreResult<bool>;

    /// Delete sessions whose `expires_at` is at or before `now`.
    async fn delete_expired(&self, now: Timestamp) -> CoreResult<u64>;
}
