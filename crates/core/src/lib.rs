//! Domain core for the IT-support helpdesk.
//!
//! Holds everything that does not need a database or HTTP stack: ticket and
//! session types, the repository contract and an in-memory store, the
//! [`session_manager::SessionManager`] and [`ticket_store::TicketStore`]
//! services, access gates, and dashboard helpers.

pub mod access;
pub mod admin;
pub mod auth;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod identity;
pub mod session;
pub mod session_manager;
pub mod store;
pub mod ticket;
pub mod ticket_store;
pub mod types;
