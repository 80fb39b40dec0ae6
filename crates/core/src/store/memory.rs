//! In-process store backed by `RwLock`-guarded maps.
//!
//! Ids come from per-table counters that only ever increase, so a deleted
//! id is never handed out again. Thread-safe; wrap in `Arc` and share.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AdminRepository, SessionRepository, TicketRepository};
use crate::admin::{AdminCredential, NewAdmin};
use crate::error::{CoreError, CoreResult};
use crate::session::{NewSession, Session};
use crate::ticket::{NewTicketRecord, Ticket, TicketStatus};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tickets: RwLock<BTreeMap<DbId, Ticket>>,
    admins: RwLock<Vec<AdminCredential>>,
    sessions: RwLock<HashMap<String, Session>>,
    next_ticket_id: AtomicI64,
    next_admin_id: AtomicI64,
    next_session_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of session rows currently held, expired ones included.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn next_id(counter: &AtomicI64) -> DbId {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

#[async_trait]
impl TicketRepository for MemoryStore {
    async fn insert(&self, record: NewTicketRecord) -> CoreResult<Ticket> {
        let NewTicketRecord {
            ticket,
            status,
            created_at,
        } = record;
        let row = Ticket {
            id: next_id(&self.next_ticket_id),
            reporter_name: ticket.reporter_name,
            reporter_email: ticket.reporter_email,
            reporter_contact: ticket.reporter_contact,
            title: ticket.title,
            category: ticket.category,
            description: ticket.description,
            images: ticket.images,
            status,
            created_at,
        };
        self.tickets.write().await.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> CoreResult<Vec<Ticket>> {
        Ok(self.tickets.read().await.values().cloned().collect())
    }

    async fn list_by_reporter(&self, email: &str) -> CoreResult<Vec<Ticket>> {
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.reporter_email == email)
            .cloned()
            .collect())
    }

    async fn find(&self, id: DbId) -> CoreResult<Option<Ticket>> {
        Ok(self.tickets.read().await.get(&id).cloned())
    }

    async fn update_status(&self, id: DbId, status: TicketStatus) -> CoreResult<Option<Ticket>> {
        let mut tickets = self.tickets.write().await;
        Ok(tickets.get_mut(&id).map(|ticket| {
            ticket.status = status;
            ticket.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> CoreResult<bool> {
        Ok(self.tickets.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<AdminCredential>> {
        Ok(self
            .admins
            .read()
            .await
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create(&self, input: NewAdmin) -> CoreResult<AdminCredential> {
        let mut admins = self.admins.write().await;
        if admins.iter().any(|a| a.email == input.email) {
            return Err(CoreError::Validation(format!(
                "An admin with email '{}' already exists",
                input.email
            )));
        }
        let admin = AdminCredential {
            id: next_id(&self.next_admin_id),
            email: input.email,
            password_hash: input.password_hash,
            created_at: chrono::Utc::now(),
        };
        admins.push(admin.clone());
        Ok(admin)
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, input: NewSession) -> CoreResult<Session> {
        let session = Session {
            id: next_id(&self.next_session_id),
            token_hash: input.token_hash,
            admin_id: input.admin_id,
            created_at: input.created_at,
            expires_at: input.expires_at,
        };
        self.sessions
            .write()
            .await
            .insert(session.token_hash.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> CoreResult<Option<Session>> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> CoreResult<bool> {
        Ok(self.sessions.write().await.remove(token_hash).is_some())
    }

    async fn delete_expired(&self, now: Timestamp) -> CoreResult<u64> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        Ok((before - sessions.len()) as u64)
    }
}
