//! Request extractors that gate handlers behind authentication.
//!
//! - [`admin::AdminSession`] -- a valid admin session token.
//! - [`employee::EmployeeUser`] -- a signed-in employee per the identity provider.

use axum::http::request::Parts;
use helpdesk_core::error::CoreError;

use crate::error::AppError;

pub mod admin;
pub mod employee;

/// Read an optional `Authorization: Bearer <token>` header.
///
/// An absent header yields `Ok(None)`; a header in any other format is
/// rejected outright.
pub(crate) fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(value) = parts.headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| invalid_format())?;
    let token = value.strip_prefix("Bearer ").ok_or_else(invalid_format)?;
    Ok(Some(token.trim().to_string()).filter(|t| !t.is_empty()))
}

fn invalid_format() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid Authorization format. Expected: Bearer <token>".into(),
    ))
}
