//! Event model

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A purchasable occasion with finite ticket inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub available_tickets: u32,
    pub total_tickets: u32,
}

impl Event {
    /// Whether `quantity` tickets can be sold right now
    pub fn has_capacity(&self, quantity: u32) -> bool {
        self.available_tickets >= quantity
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_tickets == 0
    }

    pub fn sold_tickets(&self) -> u32 {
        self.total_tickets.saturating_sub(self.available_tickets)
    }

    /// Amount due for `quantity` tickets, `None` if it does not fit a `Decimal`
    pub fn total_for(&self, quantity: u32) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(quantity))
    }

    /// Price as shown in the purchase prompt, e.g. `R$ 120.00`
    pub fn price_label(&self) -> String {
        format!("R$ {:.2}", self.price)
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice(self.id));
        }

        if self.available_tickets > self.total_tickets {
            return Err(CatalogError::InvalidInventory {
                event_id: self.id,
                available: self.available_tickets,
                total: self.total_tickets,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_event(id: u32, available: u32, total: u32, price: Decimal) -> Event {
    Event {
        id,
        title: format!("Event {id}"),
        description: "Sample".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 30).unwrap(),
        time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        location: "Somewhere".to_string(),
        price,
        image: String::new(),
        category: "Test".to_string(),
        available_tickets: available,
        total_tickets: total,
    }
}
