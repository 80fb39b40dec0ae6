//! Employee authentication against the external identity provider.
//!
//! - [`identity`] -- verifies provider-issued JWTs and maps them to an
//!   [`IdentityState`](helpdesk_core::identity::IdentityState).

pub mod identity;
