//! Payment event domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;
use super::order::RequestId;
use crate::capability::OpaqueData;

/// Unique identifier for a PaymentEvent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random EventId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an EventId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The type of a payment transaction against an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Funds reserved against the instrument
    Reserve,
    /// Amount of an existing reservation changed
    ModifyReservation,
    /// Reservation released without settlement
    CancelReservation,
    /// Reserved funds settled
    Charge,
    /// A settled charge undone in full
    ReverseCharge,
    /// Money returned to the customer after settlement
    Credit,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Reserve => write!(f, "RESERVE"),
            TransactionType::ModifyReservation => write!(f, "MODIFY_RESERVATION"),
            TransactionType::CancelReservation => write!(f, "CANCEL_RESERVATION"),
            TransactionType::Charge => write!(f, "CHARGE"),
            TransactionType::ReverseCharge => write!(f, "REVERSE_CHARGE"),
            TransactionType::Credit => write!(f, "CREDIT"),
        }
    }
}

/// Outcome recorded for an attempted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// The provider accepted the operation
    Approved,
    /// The provider asked for settlement to be held; not a failure
    Skipped,
    /// The provider rejected the operation outright
    Denied,
    /// The operation was attempted and failed
    Failed,
}

/// One durable record of an attempted or completed payment operation
/// against an order.
///
/// Events are immutable once created - they represent a historical record
/// of what happened. They are only ever appended; an order's history is the
/// unit of validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// Unique identifier
    pub id: EventId,
    /// Type of transaction
    pub transaction_type: TransactionType,
    /// Recorded outcome
    pub status: PaymentStatus,
    /// Amount the operation was attempted for
    pub amount: Money,
    /// Provider-side processing time
    pub occurred_at: DateTime<Utc>,
    /// Opaque provider state threaded into dependent follow-ups
    pub continuation_data: OpaqueData,
    /// Idempotency id of the request that produced this event
    pub originating_request_id: RequestId,
    /// Diagnostic for operators; populated on failed events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_message: Option<String>,
    /// User-safe message; populated on failed events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_message: Option<String>,
}

impl PaymentEvent {
    /// Creates an approved (or held) event from a capability response's
    /// fields.
    pub fn succeeded(
        transaction_type: TransactionType,
        status: PaymentStatus,
        amount: Money,
        occurred_at: DateTime<Utc>,
        continuation_data: OpaqueData,
        originating_request_id: RequestId,
    ) -> Self {
        Self {
            id: EventId::new(),
            transaction_type,
            status,
            amount,
            occurred_at,
            continuation_data,
            originating_request_id,
            internal_message: None,
            external_message: None,
        }
    }

    /// Creates a failed event carrying the plugin's diagnostics for audit.
    pub fn failed(
        transaction_type: TransactionType,
        amount: Money,
        originating_request_id: RequestId,
        internal_message: impl Into<String>,
        external_message: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(),
            transaction_type,
            status: PaymentStatus::Failed,
            amount,
            occurred_at: Utc::now(),
            continuation_data: OpaqueData::new(),
            originating_request_id,
            internal_message: Some(internal_message.into()),
            external_message: Some(external_message.into()),
        }
    }

    /// Returns true if the event was approved.
    pub fn is_approved(&self) -> bool {
        self.status == PaymentStatus::Approved
    }
}
