//! Row structs for each table.
//!
//! Rows convert into the core domain types; conversion fails only when a
//! stored value violates a domain invariant (e.g. an unknown status).

pub mod admin;
pub mod session;
pub mod ticket;
