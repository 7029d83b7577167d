//! # Payment Store
//!
//! Concrete history store implementations (adapters) for the payment
//! core. This crate provides the in-memory adapter that implements the
//! `HistoryStore` port; embedders with durable persistence supply their
//! own.

use async_trait::async_trait;
use dashmap::DashMap;

use payment_types::{HistoryStore, OrderId, PaymentEvent, StoreError};

/// In-memory append-only history store.
///
/// Histories are keyed by order id; each map entry is locked for the
/// duration of a single call, which makes individual loads and appends
/// atomic. The per-order serialization discipline across a whole
/// operation is the orchestrator's job, not this adapter's.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    histories: DashMap<OrderId, Vec<PaymentEvent>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders with at least one event. Mainly for tests.
    pub fn order_count(&self) -> usize {
        self.histories.len()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load(&self, order_id: &OrderId) -> Result<Vec<PaymentEvent>, StoreError> {
        Ok(self
            .histories
            .get(order_id)
            .map(|events| events.clone())
            .unwrap_or_default())
    }

    async fn append(&self, order_id: &OrderId, event: PaymentEvent) -> Result<(), StoreError> {
        self.histories
            .entry(order_id.clone())
            .or_default()
            .push(event);
        Ok(())
    }
}
