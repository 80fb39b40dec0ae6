//! Ticket domain types, status enum, and submission validation.
//!
//! A ticket's status is a closed enum; the wire and storage names are
//! `open`, `in-progress` and `resolved`. Any status may move to any other
//! (including itself); there is no transition graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of image attachments per ticket.
pub const MAX_IMAGES: usize = 5;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid ticket status '{s}'. Must be one of: open, in-progress, resolved"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A support ticket as owned by the persistence store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: DbId,
    pub reporter_name: String,
    pub reporter_email: String,
    pub reporter_contact: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub status: TicketStatus,
    pub created_at: Timestamp,
}

/// An employee's ticket submission.
///
/// Status and creation time are deliberately absent: the store forces them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTicket {
    #[validate(length(min = 1, message = "reporter_name is required"))]
    pub reporter_name: String,
    #[validate(email(message = "reporter_email must be a valid email address"))]
    pub reporter_email: String,
    #[validate(length(min = 1, message = "reporter_contact is required"))]
    pub reporter_contact: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Image URLs, at most [`MAX_IMAGES`]. Checked by [`validate_new_ticket`].
    #[serde(default)]
    pub images: Vec<String>,
}

/// The full row handed to a [`TicketRepository`](crate::store::TicketRepository)
/// on insert. Only the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTicketRecord {
    pub ticket: NewTicket,
    pub status: TicketStatus,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a submission before it reaches the store.
///
/// Runs the derived field rules, then rejects whitespace-only text, more
/// than [`MAX_IMAGES`] attachments, and blank image URLs.
pub fn validate_new_ticket(input: &NewTicket) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let required = [
        ("reporter_name", &input.reporter_name),
        ("reporter_email", &input.reporter_email),
        ("reporter_contact", &input.reporter_contact),
        ("title", &input.title),
        ("category", &input.category),
        ("description", &input.description),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }

    if input.images.len() > MAX_IMAGES {
        return Err(CoreError::Validation(format!(
            "At most {MAX_IMAGES} images may be attached (got {})",
            input.images.len()
        )));
    }
    if input.images.iter().any(|url| url.trim().is_empty()) {
        return Err(CoreError::Validation("Image URLs must not be blank".into()));
    }

    Ok(())
}
