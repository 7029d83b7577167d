//! Order-scoped identifiers and context supplied by the outer commerce
//! services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;
use crate::capability::OpaqueData;

/// Unique identifier for an order.
///
/// Orders are created by the cart/order services; the payment core only
/// keys histories and locks by this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a configured payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Idempotency identifier for one attempted operation.
///
/// Retries of a temporary failure MUST reuse the same id so the
/// plugin/processor side can de-duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new random RequestId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RequestId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of the order passed to every capability request.
///
/// Produced by the order/cart services; the payment core forwards it to
/// plugins and uses the total's currency for nothing - currency consistency
/// is enforced over the event history instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderContext {
    /// Human-facing order number
    pub order_number: String,
    /// Total value of the order
    pub order_total: Money,
    /// Customer contact for the provider's receipts/risk checks
    pub customer_email: String,
}

impl OrderContext {
    pub fn new(
        order_number: impl Into<String>,
        order_total: Money,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            order_total,
            customer_email: customer_email.into(),
        }
    }
}

/// A stored payment instrument selected for an order.
///
/// `data` is the provider's own representation of the instrument (token,
/// vault reference, ...) and is forwarded verbatim; `provider` selects the
/// plugin in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInstrument {
    pub provider: ProviderId,
    pub data: OpaqueData,
}

impl PaymentInstrument {
    pub fn new(provider: ProviderId, data: OpaqueData) -> Self {
        Self { provider, data }
    }
}
