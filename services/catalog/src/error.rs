//! Custom error types for the catalog service

use thiserror::Error;

/// Reasons a purchase is refused. State is unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Event {0} not found")]
    EventNotFound(u32),

    #[error("Tickets sold out for event {event_id}: requested {requested}, {available} left")]
    SoldOut {
        event_id: u32,
        requested: u32,
        available: u32,
    },

    #[error("Total for {quantity} tickets of event {event_id} is too large")]
    AmountOverflow { event_id: u32, quantity: u32 },
}

/// Problems with the event list a store is built from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Event {event_id} has {available} tickets available but only {total} in total")]
    InvalidInventory {
        event_id: u32,
        available: u32,
        total: u32,
    },

    #[error("Event {0} has a negative price")]
    NegativePrice(u32),

    #[error("Event {0} appears more than once")]
    DuplicateEvent(u32),
}

/// Type alias for purchase results
pub type PurchaseResult<T> = Result<T, PurchaseError>;
