//! Shared response envelope types for API handlers.
//!
//! Ticket payloads use a `{ "data": ... }` envelope. Mutations that return
//! nothing but an acknowledgement use [`SuccessResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}
