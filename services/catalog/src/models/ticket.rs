//! Ticket model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::Event;

/// Ticket lifecycle state
///
/// Only `Active` is ever assigned: no operation moves a ticket to `Used`
/// or `Expired` yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
    Expired,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Active => "Active",
            TicketStatus::Used => "Used",
            TicketStatus::Expired => "Expired",
        }
    }
}

/// Proof of purchase for one admission unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: u32,
    pub user_id: u32,
    pub qr_code: String,
    pub purchased_at: DateTime<Utc>,
    pub status: TicketStatus,
    /// Event as it was when the ticket was bought
    pub event: Event,
}

impl Ticket {
    /// Mint a fresh active ticket for `event`
    pub(crate) fn mint(event: &Event, user_id: u32, purchased_at: DateTime<Utc>) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            event_id: event.id,
            user_id,
            qr_code: format!("QR_{id}"),
            purchased_at,
            status: TicketStatus::Active,
            event: event.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TicketStatus::Active
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Text handed to the platform share sheet
    pub fn share_message(&self) -> String {
        format!("Ticket: {}\nCode: {}", self.event.title, self.qr_code)
    }
}
