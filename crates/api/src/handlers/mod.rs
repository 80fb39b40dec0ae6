pub mod admin_tickets;
pub mod auth;
pub mod tickets;
