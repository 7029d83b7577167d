//! History store port trait.
//!
//! The persistence layer behind the orchestrator: an append-only store of
//! payment events keyed by order. Adapters (in-memory, database) implement
//! this trait.

use async_trait::async_trait;

use crate::domain::{OrderId, PaymentEvent};

/// Data access failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Append-only store of an order's payment history.
///
/// Events are never mutated or removed. Callers are responsible for the
/// per-order serialization discipline; implementations only have to make
/// each single call atomic.
#[async_trait]
pub trait HistoryStore: Send + Sync + 'static {
    /// Reads the full ordered event list for an order. Unknown orders have
    /// an empty history.
    async fn load(&self, order_id: &OrderId) -> Result<Vec<PaymentEvent>, StoreError>;

    /// Appends one event to an order's history.
    async fn append(&self, order_id: &OrderId, event: PaymentEvent) -> Result<(), StoreError>;
}
