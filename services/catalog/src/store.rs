//! Ticket store: event inventory plus the tickets and purchases of one user

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, PurchaseError, PurchaseResult};
use crate::models::{Event, Purchase, Ticket};
use crate::repositories::seeded_events;
use crate::summary::{CatalogStats, TicketSummary};

#[derive(Debug, Default)]
struct Ledger {
    tickets: Vec<Ticket>,
    purchases: Vec<Purchase>,
}

/// Owner of the catalog and ticket state
///
/// Every event sits behind its own lock, so purchases on one event are
/// serialized while purchases on different events only contend on the
/// ledger. The ledger lock is always taken after an event lock.
#[derive(Debug, Clone)]
pub struct TicketStore {
    owner: u32,
    events: Arc<Vec<Mutex<Event>>>,
    index: Arc<HashMap<u32, usize>>,
    ledger: Arc<Mutex<Ledger>>,
}

impl TicketStore {
    /// Build a store over `events` for the user with id `owner`
    pub fn new(events: Vec<Event>, owner: u32) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(events.len());

        for (position, event) in events.iter().enumerate() {
            event.validate()?;
            if index.insert(event.id, position).is_some() {
                return Err(CatalogError::DuplicateEvent(event.id));
            }
        }

        info!(events = events.len(), owner, "Ticket store initialized");

        Ok(Self {
            owner,
            events: Arc::new(events.into_iter().map(Mutex::new).collect()),
            index: Arc::new(index),
            ledger: Arc::new(Mutex::new(Ledger::default())),
        })
    }

    /// Store over the shipped event list
    pub fn seeded(owner: u32) -> Result<Self, CatalogError> {
        Self::new(seeded_events(), owner)
    }

    /// Id of the user minted tickets belong to
    pub fn owner(&self) -> u32 {
        self.owner
    }

    /// Buy `quantity` tickets for `event_id`
    ///
    /// All or nothing: either the inventory is decremented and the tickets
    /// and purchase are recorded, or nothing changes.
    pub async fn purchase_ticket(&self, event_id: u32, quantity: u32) -> PurchaseResult<Purchase> {
        if quantity == 0 {
            warn!(event_id, "Rejected purchase of zero tickets");
            return Err(PurchaseError::InvalidQuantity);
        }

        let slot = self
            .index
            .get(&event_id)
            .map(|&position| &self.events[position])
            .ok_or_else(|| {
                warn!(event_id, "Purchase for unknown event");
                PurchaseError::EventNotFound(event_id)
            })?;

        let mut event = slot.lock().await;

        if !event.has_capacity(quantity) {
            warn!(
                event_id,
                requested = quantity,
                available = event.available_tickets,
                "Purchase rejected, not enough tickets"
            );
            return Err(PurchaseError::SoldOut {
                event_id,
                requested: quantity,
                available: event.available_tickets,
            });
        }

        let Some(total) = event.total_for(quantity) else {
            warn!(event_id, quantity, price = %event.price, "Purchase rejected, total overflows");
            return Err(PurchaseError::AmountOverflow { event_id, quantity });
        };

        // Minted before the decrement so tickets carry the pre-purchase event
        let now = Utc::now();
        let tickets: Vec<Ticket> = (0..quantity)
            .map(|_| Ticket::mint(&event, self.owner, now))
            .collect();
        let purchase = Purchase::completed(tickets, total, now);

        let mut ledger = self.ledger.lock().await;
        event.available_tickets -= quantity;

        ledger.tickets.extend(purchase.tickets.iter().cloned());
        ledger.purchases.push(purchase.clone());

        info!(
            event_id,
            quantity,
            purchase_id = %purchase.id,
            total = %purchase.total_amount,
            remaining = event.available_tickets,
            "Tickets purchased"
        );

        Ok(purchase)
    }

    /// Snapshot of every event, in catalog order
    pub async fn list_events(&self) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.events.len());
        for slot in self.events.iter() {
            events.push(slot.lock().await.clone());
        }
        events
    }

    /// Snapshot of one event
    pub async fn event(&self, event_id: u32) -> Option<Event> {
        let position = *self.index.get(&event_id)?;
        Some(self.events[position].lock().await.clone())
    }

    /// Owned tickets, oldest first
    pub async fn list_owned_tickets(&self) -> Vec<Ticket> {
        let ledger = self.ledger.lock().await;
        debug!(count = ledger.tickets.len(), "Listing owned tickets");
        ledger.tickets.clone()
    }

    /// Completed purchases, oldest first
    pub async fn list_purchases(&self) -> Vec<Purchase> {
        self.ledger.lock().await.purchases.clone()
    }

    pub async fn summary(&self) -> TicketSummary {
        let ledger = self.ledger.lock().await;
        TicketSummary::from_ledger(&ledger.tickets, ledger.purchases.len())
    }

    pub async fn stats(&self) -> CatalogStats {
        CatalogStats::from_events(&self.list_events().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::sample_event;
    use crate::models::{PaymentMethod, PurchaseStatus, TicketStatus};
    use rust_decimal::Decimal;
    use tokio_test::{assert_err, assert_ok};

    fn workshop_store() -> TicketStore {
        TicketStore::new(vec![sample_event(4, 25, 30, Decimal::new(15000, 2))], 2).unwrap()
    }

    #[tokio::test]
    async fn test_purchase_decrements_and_records() {
        let store = workshop_store();

        let purchase = assert_ok!(store.purchase_ticket(4, 5).await);

        assert_eq!(purchase.quantity(), 5);
        assert_eq!(purchase.total_amount, Decimal::new(750, 0));
        assert_eq!(purchase.payment_method, PaymentMethod::Pix);
        assert_eq!(purchase.status, PurchaseStatus::Completed);
        assert!(purchase.tickets.iter().all(|t| t.status == TicketStatus::Active));
        assert!(purchase.tickets.iter().all(|t| t.user_id == 2 && t.event_id == 4));

        assert_eq!(store.event(4).await.unwrap().available_tickets, 20);
        assert_eq!(store.list_owned_tickets().await, purchase.tickets);
        assert_eq!(store.list_purchases().await, vec![purchase]);
    }

    #[tokio::test]
    async fn test_sold_out_leaves_state_unchanged() {
        let store = workshop_store();
        store.purchase_ticket(4, 5).await.unwrap();

        let err = store.purchase_ticket(4, 21).await.unwrap_err();
        assert_eq!(
            err,
            PurchaseError::SoldOut {
                event_id: 4,
                requested: 21,
                available: 20,
            }
        );

        assert_eq!(store.event(4).await.unwrap().available_tickets, 20);
        assert_eq!(store.list_owned_tickets().await.len(), 5);
        assert_eq!(store.list_purchases().await.len(), 1);
    }

    #[tokio::test]
    async fn test_buying_the_last_ticket() {
        let store = TicketStore::new(vec![sample_event(1, 1, 1, Decimal::ONE)], 2).unwrap();

        store.purchase_ticket(1, 1).await.unwrap();
        let event = store.event(1).await.unwrap();
        assert!(event.is_sold_out());

        assert!(matches!(
            store.purchase_ticket(1, 1).await,
            Err(PurchaseError::SoldOut { available: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_event_and_zero_quantity() {
        let store = workshop_store();

        assert_eq!(
            store.purchase_ticket(99, 1).await.unwrap_err(),
            PurchaseError::EventNotFound(99)
        );
        assert_eq!(
            store.purchase_ticket(4, 0).await.unwrap_err(),
            PurchaseError::InvalidQuantity
        );

        assert_eq!(store.event(4).await.unwrap().available_tickets, 25);
        assert!(store.list_owned_tickets().await.is_empty());
        assert!(store.list_purchases().await.is_empty());
        assert_eq!(store.event(99).await, None);
    }

    #[tokio::test]
    async fn test_overflowing_total_leaves_state_unchanged() {
        let store = TicketStore::new(vec![sample_event(1, 10, 10, Decimal::MAX)], 2).unwrap();

        let err = assert_err!(store.purchase_ticket(1, 2).await);
        assert_eq!(err, PurchaseError::AmountOverflow { event_id: 1, quantity: 2 });

        assert_eq!(store.event(1).await.unwrap().available_tickets, 10);
        assert!(store.list_owned_tickets().await.is_empty());
        assert!(store.list_purchases().await.is_empty());

        let purchase = assert_ok!(store.purchase_ticket(1, 1).await);
        assert_eq!(purchase.total_amount, Decimal::MAX);
        assert_eq!(store.event(1).await.unwrap().available_tickets, 9);
    }

    #[tokio::test]
    async fn test_tickets_snapshot_event_before_purchase() {
        let store = workshop_store();
        assert_eq!(store.owner(), 2);

        let first = store.purchase_ticket(4, 5).await.unwrap();
        assert!(first.tickets.iter().all(|t| t.event.available_tickets == 25));

        let second = store.purchase_ticket(4, 1).await.unwrap();
        assert_eq!(second.tickets[0].event.available_tickets, 20);
        assert_eq!(second.tickets[0].user_id, store.owner());
    }

    #[tokio::test]
    async fn test_new_rejects_bad_catalogs() {
        let duplicate = TicketStore::new(
            vec![
                sample_event(1, 1, 1, Decimal::ONE),
                sample_event(1, 2, 2, Decimal::ONE),
            ],
            2,
        );
        assert_eq!(duplicate.unwrap_err(), CatalogError::DuplicateEvent(1));

        let overfull = TicketStore::new(vec![sample_event(3, 5, 4, Decimal::ONE)], 2);
        assert!(matches!(overfull, Err(CatalogError::InvalidInventory { .. })));
    }

    #[tokio::test]
    async fn test_summary_and_stats() {
        let store = TicketStore::seeded(2).unwrap();
        assert_eq!(store.summary().await, TicketSummary::default());

        store.purchase_ticket(1, 2).await.unwrap();
        store.purchase_ticket(2, 1).await.unwrap();

        let summary = store.summary().await;
        assert_eq!(summary.total_tickets, 3);
        assert_eq!(summary.active_tickets, 3);
        assert_eq!(summary.purchases, 2);

        let stats = store.stats().await;
        assert_eq!(stats.events, 4);
        assert_eq!(stats.tickets_available, 450 + 180 + 280 + 25 - 3);
    }
}
