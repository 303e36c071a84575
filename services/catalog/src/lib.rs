//! Event catalog and ticket purchasing for the ticketing client
//!
//! [`TicketStore`] owns the event inventory together with the tickets and
//! purchases of one user. Purchases are all-or-nothing and never sell more
//! tickets than an event has available, even when invoked concurrently.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;
pub mod summary;

pub use error::{CatalogError, PurchaseError, PurchaseResult};
pub use models::{Event, PaymentMethod, Purchase, PurchaseStatus, Ticket, TicketStatus};
pub use store::TicketStore;
pub use summary::{CatalogStats, TicketSummary};
