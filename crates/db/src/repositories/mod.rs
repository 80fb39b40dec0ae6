//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod session_repo;
pub mod ticket_repo;

pub use admin_repo::AdminRepo;
pub use session_repo::AdminSessionRepo;
pub use ticket_repo::TicketRepo;
