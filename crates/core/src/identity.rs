//! Employee identity as reported by the external identity provider.
//!
//! Employee credentials never pass through this service. A provider
//! implementation turns whatever the client presents into an
//! [`IdentityState`].

use async_trait::async_trait;
use serde::Serialize;

/// The signed-in employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeIdentity {
    pub id: String,
    pub display_name: String,
    pub primary_email: String,
}

/// Provider session tri-state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    /// The provider has not settled yet.
    Loading,
    SignedOut,
    SignedIn(EmployeeIdentity),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a presented credential (`None` if the client sent nothing).
    async fn resolve(&self, credential: Option<&str>) -> IdentityState;
}
