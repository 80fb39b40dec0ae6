use std::sync::Arc;

use chrono::Duration;
use helpdesk_core::clock::Clock;
use helpdesk_core::identity::IdentityProvider;
use helpdesk_core::session_manager::SessionManager;
use helpdesk_core::store::{AdminRepository, SessionRepository, TicketRepository};
use helpdesk_core::ticket_store::TicketStore;

use crate::auth::identity::JwtIdentityProvider;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Admin login, validation and logout.
    pub sessions: Arc<SessionManager>,
    /// Ticket persistence.
    pub tickets: Arc<TicketStore>,
    /// Resolves employee Bearer tokens.
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Wire the services over one store that backs all three repositories.
    ///
    /// Employee identity is verified with the configured provider secret.
    pub fn new<S>(config: ServerConfig, store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: TicketRepository + AdminRepository + SessionRepository + 'static,
    {
        let identity = Arc::new(JwtIdentityProvider::new(config.identity.clone()));
        Self::with_identity(config, store, clock, identity)
    }

    /// Like [`AppState::new`] with a caller-supplied identity provider.
    pub fn with_identity<S>(
        config: ServerConfig,
        store: Arc<S>,
        clock: Arc<dyn Clock>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self
    where
        S: TicketRepository + AdminRepository + SessionRepository + 'static,
    {
        let admins: Arc<dyn AdminRepository> = store.clone();
        let session_repo: Arc<dyn SessionRepository> = store.clone();
        let sessions = SessionManager::new(admins, session_repo, Arc::clone(&clock))
            .with_ttl(Duration::hours(config.session_ttl_hours));
        let tickets = TicketStore::new(store, clock);

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            tickets: Arc::new(tickets),
            identity,
        }
    }
}
