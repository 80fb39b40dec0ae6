//! Derived views over a ticket list: filtering, status counts, and
//! per-day / per-category breakdowns for the admin dashboard.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::ticket::{Ticket, TicketStatus};

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Dashboard filter. Absent fields match every ticket.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub category: Option<String>,
    /// Case-insensitive substring over title, id, reporter name and email.
    pub search: Option<String>,
}

impl TicketFilter {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if self.status.is_some_and(|s| s != ticket.status) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|c| c != ticket.category)
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                [
                    ticket.title.as_str(),
                    ticket.reporter_name.as_str(),
                    ticket.reporter_email.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
                    || ticket.id.to_string().contains(&query)
            }
        }
    }

    pub fn apply(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.into_iter().filter(|t| self.matches(t)).collect()
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn tally(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(Self::default(), |mut acc, t| {
            acc.total += 1;
            match t.status {
                TicketStatus::Open => acc.open += 1,
                TicketStatus::InProgress => acc.in_progress += 1,
                TicketStatus::Resolved => acc.resolved += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Tickets created per UTC calendar day, oldest day first.
pub fn daily_counts(tickets: &[Ticket]) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ticket in tickets {
        *days.entry(ticket.created_at.date_naive()).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Tickets per category, sorted by category label.
pub fn category_counts(tickets: &[Ticket]) -> Vec<CategoryCount> {
    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for ticket in tickets {
        *categories.entry(ticket.category.as_str()).or_default() += 1;
    }
    categories
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}
