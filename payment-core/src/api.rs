//! Operation request DTOs exposed to the outer service layer.
//!
//! One struct per exposed capability call. The outer layer supplies the
//! order id, the amount where applicable, the selected instrument, the
//! order context and any custom request data; `request_id` is the
//! idempotency id and MUST be reused when retrying a temporary failure.

use serde::{Deserialize, Serialize};

use payment_types::{Money, OpaqueData, OrderContext, OrderId, PaymentInstrument, RequestId};

/// Reserve funds for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveOrder {
    pub order_id: OrderId,
    pub amount: Money,
    pub instrument: PaymentInstrument,
    pub order_context: OrderContext,
    #[serde(default)]
    pub custom_request_data: OpaqueData,
    /// Omit for a fresh attempt; set to retry a temporary failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

/// Change the amount of the order's reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifyOrderReservation {
    pub order_id: OrderId,
    /// The new reservation amount
    pub amount: Money,
    pub instrument: PaymentInstrument,
    pub order_context: OrderContext,
    #[serde(default)]
    pub custom_request_data: OpaqueData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

/// Release the order's reservation without settlement.
///
/// Carries no amount: the cancellation is for the most recent approved
/// reservation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelOrderReservation {
    pub order_id: OrderId,
    pub instrument: PaymentInstrument,
    pub order_context: OrderContext,
    #[serde(default)]
    pub custom_request_data: OpaqueData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

/// Settle reserved funds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeOrder {
    pub order_id: OrderId,
    pub amount: Money,
    pub instrument: PaymentInstrument,
    pub order_context: OrderContext,
    #[serde(default)]
    pub custom_request_data: OpaqueData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

/// Undo the order's settled charge in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseOrderCharge {
    pub order_id: OrderId,
    pub instrument: PaymentInstrument,
    pub order_context: OrderContext,
    #[serde(default)]
    pub custom_request_data: OpaqueData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

/// Return money to the customer after settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditOrder {
    pub order_id: OrderId,
    pub amount: Money,
    pub instrument: PaymentInstrument,
    pub order_context: OrderContext,
    #[serde(default)]
    pub custom_request_data: OpaqueData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}
