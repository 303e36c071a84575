//! Catalog models

pub mod event;
pub mod purchase;
pub mod ticket;

pub use event::Event;
pub use purchase::{PaymentMethod, Purchase, PurchaseStatus};
pub use ticket::{Ticket, TicketStatus};
