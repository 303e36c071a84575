//! Purchase model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ticket::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Completed,
    Pending,
    Cancelled,
}

/// Tickets bought together in one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub tickets: Vec<Ticket>,
    pub total_amount: Decimal,
    pub purchased_at: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub status: PurchaseStatus,
}

impl Purchase {
    pub(crate) fn completed(
        tickets: Vec<Ticket>,
        total_amount: Decimal,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tickets,
            total_amount,
            purchased_at,
            payment_method: PaymentMethod::default(),
            status: PurchaseStatus::Completed,
        }
    }

    pub fn quantity(&self) -> usize {
        self.tickets.len()
    }
}
