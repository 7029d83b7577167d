//! Typed capability requests and their builders.
//!
//! A builder either yields a fully-populated request or fails with
//! [`RequestBuildError`], so malformed requests never reach a plugin.
//! Follow-up requests carry the originating operation's continuation
//! bundle verbatim.

use serde::{Deserialize, Serialize};

use super::continuation::{ChargeData, OpaqueData, ReservationData};
use crate::domain::{Currency, Money, OrderContext};
use crate::error::RequestBuildError;

/// Request to reserve funds against a payment instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveRequest {
    pub amount: Money,
    pub order_context: OrderContext,
    pub payment_instrument_data: OpaqueData,
    pub custom_request_data: OpaqueData,
    pub plugin_config_data: OpaqueData,
}

impl ReserveRequest {
    pub fn builder() -> ReserveRequestBuilder {
        ReserveRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ReserveRequestBuilder {
    amount: Option<Money>,
    order_context: Option<OrderContext>,
    payment_instrument_data: Option<OpaqueData>,
    custom_request_data: Option<OpaqueData>,
    plugin_config_data: Option<OpaqueData>,
}

impl ReserveRequestBuilder {
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn order_context(mut self, order_context: OrderContext) -> Self {
        self.order_context = Some(order_context);
        self
    }

    pub fn payment_instrument_data(mut self, data: OpaqueData) -> Self {
        self.payment_instrument_data = Some(data);
        self
    }

    pub fn custom_request_data(mut self, data: OpaqueData) -> Self {
        self.custom_request_data = Some(data);
        self
    }

    pub fn plugin_config_data(mut self, data: OpaqueData) -> Self {
        self.plugin_config_data = Some(data);
        self
    }

    pub fn build(self) -> Result<ReserveRequest, RequestBuildError> {
        Ok(ReserveRequest {
            amount: self.amount.ok_or(RequestBuildError::MissingField("amount"))?,
            order_context: self
                .order_context
                .ok_or(RequestBuildError::MissingField("order_context"))?,
            payment_instrument_data: self
                .payment_instrument_data
                .ok_or(RequestBuildError::MissingField("payment_instrument_data"))?,
            custom_request_data: self
                .custom_request_data
                .ok_or(RequestBuildError::MissingField("custom_request_data"))?,
            plugin_config_data: self.plugin_config_data.unwrap_or_default(),
        })
    }
}

/// Request to change the amount of an existing reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyReservationRequest {
    pub amount: Money,
    pub reservation_data: ReservationData,
    pub order_context: OrderContext,
    pub payment_instrument_data: OpaqueData,
    pub custom_request_data: OpaqueData,
    pub plugin_config_data: OpaqueData,
}

impl ModifyReservationRequest {
    pub fn builder() -> ModifyReservationRequestBuilder {
        ModifyReservationRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ModifyReservationRequestBuilder {
    amount: Option<Money>,
    reservation_data: Option<ReservationData>,
    order_context: Option<OrderContext>,
    payment_instrument_data: Option<OpaqueData>,
    custom_request_data: Option<OpaqueData>,
    plugin_config_data: Option<OpaqueData>,
}

impl ModifyReservationRequestBuilder {
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn reservation_data(mut self, data: ReservationData) -> Self {
        self.reservation_data = Some(data);
        self
    }

    pub fn order_context(mut self, order_context: OrderContext) -> Self {
        self.order_context = Some(order_context);
        self
    }

    pub fn payment_instrument_data(mut self, data: OpaqueData) -> Self {
        self.payment_instrument_data = Some(data);
        self
    }

    pub fn custom_request_data(mut self, data: OpaqueData) -> Self {
        self.custom_request_data = Some(data);
        self
    }

    pub fn plugin_config_data(mut self, data: OpaqueData) -> Self {
        self.plugin_config_data = Some(data);
        self
    }

    pub fn build(self) -> Result<ModifyReservationRequest, RequestBuildError> {
        Ok(ModifyReservationRequest {
            amount: self.amount.ok_or(RequestBuildError::MissingField("amount"))?,
            reservation_data: self
                .reservation_data
                .ok_or(RequestBuildError::MissingField("reservation_data"))?,
            order_context: self
                .order_context
                .ok_or(RequestBuildError::MissingField("order_context"))?,
            payment_instrument_data: self
                .payment_instrument_data
                .ok_or(RequestBuildError::MissingField("payment_instrument_data"))?,
            custom_request_data: self
                .custom_request_data
                .ok_or(RequestBuildError::MissingField("custom_request_data"))?,
            plugin_config_data: self.plugin_config_data.unwrap_or_default(),
        })
    }
}

/// Request to release a reservation without settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelReservationRequest {
    pub amount: Money,
    pub reservation_data: ReservationData,
    pub order_context: OrderContext,
    pub payment_instrument_data: OpaqueData,
    pub custom_request_data: OpaqueData,
    pub plugin_config_data: OpaqueData,
}

impl CancelReservationRequest {
    pub fn builder() -> CancelReservationRequestBuilder {
        CancelReservationRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CancelReservationRequestBuilder {
    amount: Option<Money>,
    reservation_data: Option<ReservationData>,
    order_context: Option<OrderContext>,
    payment_instrument_data: Option<OpaqueData>,
    custom_request_data: Option<OpaqueData>,
    plugin_config_data: Option<OpaqueData>,
}

impl CancelReservationRequestBuilder {
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn reservation_data(mut self, data: ReservationData) -> Self {
        self.reservation_data = Some(data);
        self
    }

    pub fn order_context(mut self, order_context: OrderContext) -> Self {
        self.order_context = Some(order_context);
        self
    }

    pub fn payment_instrument_data(mut self, data: OpaqueData) -> Self {
        self.payment_instrument_data = Some(data);
        self
    }

    pub fn custom_request_data(mut self, data: OpaqueData) -> Self {
        self.custom_request_data = Some(data);
        self
    }

    pub fn plugin_config_data(mut self, data: OpaqueData) -> Self {
        self.plugin_config_data = Some(data);
        self
    }

    pub fn build(self) -> Result<CancelReservationRequest, RequestBuildError> {
        Ok(CancelReservationRequest {
            amount: self.amount.ok_or(RequestBuildError::MissingField("amount"))?,
            reservation_data: self
                .reservation_data
                .ok_or(RequestBuildError::MissingField("reservation_data"))?,
            order_context: self
                .order_context
                .ok_or(RequestBuildError::MissingField("order_context"))?,
            payment_instrument_data: self
                .payment_instrument_data
                .ok_or(RequestBuildError::MissingField("payment_instrument_data"))?,
            custom_request_data: self
                .custom_request_data
                .ok_or(RequestBuildError::MissingField("custom_request_data"))?,
            plugin_config_data: self.plugin_config_data.unwrap_or_default(),
        })
    }
}

/// Request to settle reserved funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub amount: Money,
    pub reservation_data: ReservationData,
    pub order_context: OrderContext,
    pub payment_instrument_data: OpaqueData,
    pub custom_request_data: OpaqueData,
    pub plugin_config_data: OpaqueData,
}

impl ChargeRequest {
    pub fn builder() -> ChargeRequestBuilder {
        ChargeRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ChargeRequestBuilder {
    amount: Option<Money>,
    reservation_data: Option<ReservationData>,
    order_context: Option<OrderContext>,
    payment_instrument_data: Option<OpaqueData>,
    custom_request_data: Option<OpaqueData>,
    plugin_config_data: Option<OpaqueData>,
}

impl ChargeRequestBuilder {
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn reservation_data(mut self, data: ReservationData) -> Self {
        self.reservation_data = Some(data);
        self
    }

    pub fn order_context(mut self, order_context: OrderContext) -> Self {
        self.order_context = Some(order_context);
        self
    }

    pub fn payment_instrument_data(mut self, data: OpaqueData) -> Self {
        self.payment_instrument_data = Some(data);
        self
    }

    pub fn custom_request_data(mut self, data: OpaqueData) -> Self {
        self.custom_request_data = Some(data);
        self
    }

    pub fn plugin_config_data(mut self, data: OpaqueData) -> Self {
        self.plugin_config_data = Some(data);
        self
    }

    pub fn build(self) -> Result<ChargeRequest, RequestBuildError> {
        Ok(ChargeRequest {
            amount: self.amount.ok_or(RequestBuildError::MissingField("amount"))?,
            reservation_data: self
                .reservation_data
                .ok_or(RequestBuildError::MissingField("reservation_data"))?,
            order_context: self
                .order_context
                .ok_or(RequestBuildError::MissingField("order_context"))?,
            payment_instrument_data: self
                .payment_instrument_data
                .ok_or(RequestBuildError::MissingField("payment_instrument_data"))?,
            custom_request_data: self
                .custom_request_data
                .ok_or(RequestBuildError::MissingField("custom_request_data"))?,
            plugin_config_data: self.plugin_config_data.unwrap_or_default(),
        })
    }
}

/// Request to undo a settled charge in full.
///
/// Carries no amount: a reversal is always for the whole originating
/// charge, identified by its continuation bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseChargeRequest {
    pub charge_data: ChargeData,
    pub order_context: OrderContext,
    pub payment_instrument_data: OpaqueData,
    pub custom_request_data: OpaqueData,
    pub plugin_config_data: OpaqueData,
}

impl ReverseChargeRequest {
    pub fn builder() -> ReverseChargeRequestBuilder {
        ReverseChargeRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ReverseChargeRequestBuilder {
    charge_data: Option<ChargeData>,
    order_context: Option<OrderContext>,
    payment_instrument_data: Option<OpaqueData>,
    custom_request_data: Option<OpaqueData>,
    plugin_config_data: Option<OpaqueData>,
}

impl ReverseChargeRequestBuilder {
    pub fn charge_data(mut self, data: ChargeData) -> Self {
        self.charge_data = Some(data);
        self
    }

    pub fn order_context(mut self, order_context: OrderContext) -> Self {
        self.order_context = Some(order_context);
        self
    }

    pub fn payment_instrument_data(mut self, data: OpaqueData) -> Self {
        self.payment_instrument_data = Some(data);
        self
    }

    pub fn custom_request_data(mut self, data: OpaqueData) -> Self {
        self.custom_request_data = Some(data);
        self
    }

    pub fn plugin_config_data(mut self, data: OpaqueData) -> Self {
        self.plugin_config_data = Some(data);
        self
    }

    pub fn build(self) -> Result<ReverseChargeRequest, RequestBuildError> {
        Ok(ReverseChargeRequest {
            charge_data: self
                .charge_data
                .ok_or(RequestBuildError::MissingField("charge_data"))?,
            order_context: self
                .order_context
                .ok_or(RequestBuildError::MissingField("order_context"))?,
            payment_instrument_data: self
                .payment_instrument_data
                .ok_or(RequestBuildError::MissingField("payment_instrument_data"))?,
            custom_request_data: self
                .custom_request_data
                .ok_or(RequestBuildError::MissingField("custom_request_data"))?,
            plugin_config_data: self.plugin_config_data.unwrap_or_default(),
        })
    }
}

/// Request to return money to the customer after settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRequest {
    pub amount: Money,
    pub charge_data: ChargeData,
    pub order_context: OrderContext,
    pub payment_instrument_data: OpaqueData,
    pub custom_request_data: OpaqueData,
    pub plugin_config_data: OpaqueData,
}

impl CreditRequest {
    pub fn builder() -> CreditRequestBuilder {
        CreditRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CreditRequestBuilder {
    amount: Option<Money>,
    charge_data: Option<ChargeData>,
    order_context: Option<OrderContext>,
    payment_instrument_data: Option<OpaqueData>,
    custom_request_data: Option<OpaqueData>,
    plugin_config_data: Option<OpaqueData>,
}

impl CreditRequestBuilder {
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn charge_data(mut self, data: ChargeData) -> Self {
        self.charge_data = Some(data);
        self
    }

    pub fn order_context(mut self, order_context: OrderContext) -> Self {
        self.order_context = Some(order_context);
        self
    }

    pub fn payment_instrument_data(mut self, data: OpaqueData) -> Self {
        self.payment_instrument_data = Some(data);
        self
    }

    pub fn custom_request_data(mut self, data: OpaqueData) -> Self {
        self.custom_request_data = Some(data);
        self
    }

    pub fn plugin_config_data(mut self, data: OpaqueData) -> Self {
        self.plugin_config_data = Some(data);
        self
    }

    pub fn build(self) -> Result<CreditRequest, RequestBuildError> {
        Ok(CreditRequest {
            amount: self.amount.ok_or(RequestBuildError::MissingField("amount"))?,
            charge_data: self
                .charge_data
                .ok_or(RequestBuildError::MissingField("charge_data"))?,
            order_context: self
                .order_context
                .ok_or(RequestBuildError::MissingField("order_context"))?,
            payment_instrument_data: self
                .payment_instrument_data
                .ok_or(RequestBuildError::MissingField("payment_instrument_data"))?,
            custom_request_data: self
                .custom_request_data
                .ok_or(RequestBuildError::MissingField("custom_request_data"))?,
            plugin_config_data: self.plugin_config_data.unwrap_or_default(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment instrument creation
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment instrument with the provider.
///
/// Instrument creation is order-independent and never enters an order's
/// payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInstrumentRequest {
    /// Customer-entered form fields
    pub form_data: OpaqueData,
    pub currency: Currency,
    pub customer_email: String,
    pub plugin_config_data: OpaqueData,
}

impl CreateInstrumentRequest {
    pub fn new(form_data: OpaqueData, currency: Currency, customer_email: impl Into<String>) -> Self {
        Self {
            form_data,
            currency,
            customer_email: customer_email.into(),
            plugin_config_data: OpaqueData::new(),
        }
    }
}

/// A created instrument as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedInstrument {
    /// Provider representation of the instrument, stored and forwarded
    /// verbatim on every later capability request
    pub details: OpaqueData,
}

/// Request for the client-interaction instructions needed before an
/// instrument can be created (hosted form URL, session token, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentInstructionsRequest {
    pub form_data: OpaqueData,
    pub currency: Currency,
    pub customer_email: String,
    pub plugin_config_data: OpaqueData,
}

impl InstrumentInstructionsRequest {
    pub fn new(form_data: OpaqueData, currency: Currency, customer_email: impl Into<String>) -> Self {
        Self {
            form_data,
            currency,
            customer_email: customer_email.into(),
            plugin_config_data: OpaqueData::new(),
        }
    }
}

/// Client-interaction instructions returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentInstructions {
    /// How the client should communicate with the provider
    pub communication: OpaqueData,
    /// Payload the client must carry into that interaction
    pub payload: OpaqueData,
}
