//! Counters shown on the home and tickets screens

use serde::Serialize;

use crate::models::{Event, Ticket};

/// Owned-ticket counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    pub total_tickets: usize,
    pub active_tickets: usize,
    pub purchases: usize,
}

impl TicketSummary {
    pub fn from_ledger(tickets: &[Ticket], purchases: usize) -> Self {
        Self {
            total_tickets: tickets.len(),
            active_tickets: tickets.iter().filter(|t| t.is_active()).count(),
            purchases,
        }
    }
}

/// Catalog-wide counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub events: usize,
    pub tickets_available: u64,
}

impl CatalogStats {
    pub fn from_events(events: &[Event]) -> Self {
        Self {
            events: events.len(),
            tickets_available: events.iter().map(|e| u64::from(e.available_tickets)).sum(),
        }
    }
}
