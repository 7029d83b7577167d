//! Payment orchestrator.
//!
//! For each requested operation: loads the order's history, builds the
//! capability request (threading continuation data from the anchoring
//! approved event), dispatches to the configured plugin, interprets the
//! result, appends a payment event and re-validates the whole history
//! before committing.
//!
//! Operations against one order are serialized by a per-order async mutex
//! held across the whole load-dispatch-validate-append sequence; the only
//! suspension points under the lock are the plugin invocation and the
//! store calls. Operations on different orders run independently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use payment_types::{
    CancelReservationRequest, Capability, CapabilityResult, ChargeData, ChargeRequest,
    CreateInstrumentRequest, CreatedInstrument, CreditRequest, HistoryStore,
    InstrumentInstructions, InstrumentInstructionsRequest, ModifyReservationRequest, Money,
    OrderId, PaymentEvent, PaymentStatus, ProviderId, RequestBuildError, RequestId,
    ReservationData, ReserveRequest, ReverseChargeRequest, TransactionType,
};

use crate::api::{
    CancelOrderReservation, ChargeOrder, CreditOrder, ModifyOrderReservation, ReserveOrder,
    ReverseOrderCharge,
};
use crate::error::{ConfigurationError, PaymentError};
use crate::registry::ProviderRegistry;
use crate::rules::SequenceRuleTable;
use crate::validation::HistoryValidator;

/// The payment-processing core's entry point.
///
/// Generic over `S: HistoryStore` - the persistence adapter is injected at
/// compile time. The sequence rule table is constructor-injected so
/// per-deployment or per-test overrides need no global state.
pub struct PaymentOrchestrator<S: HistoryStore> {
    store: S,
    registry: ProviderRegistry,
    validator: HistoryValidator,
    locks: DashMap<OrderId, Arc<Mutex<()>>>,
}

impl<S: HistoryStore> PaymentOrchestrator<S> {
    /// Creates an orchestrator with the standard validator set.
    pub fn new(store: S, registry: ProviderRegistry, rules: SequenceRuleTable) -> Self {
        Self {
            store,
            registry,
            validator: HistoryValidator::standard(rules),
            locks: DashMap::new(),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Exposed operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Reserves funds for an order. The first operation of every order's
    /// history.
    pub async fn reserve(&self, op: ReserveOrder) -> Result<PaymentEvent, PaymentError> {
        let lock = self.order_lock(&op.order_id);
        let _guard = lock.lock().await;

        let history = self.store.load(&op.order_id).await?;
        let request_id = op.request_id.unwrap_or_default();
        if let Some(existing) = replayed_event(&history, request_id) {
            return Ok(existing.clone());
        }

        let entry = self.registry.get(&op.instrument.provider)?;
        let request = ReserveRequest::builder()
            .amount(op.amount)
            .order_context(op.order_context)
            .payment_instrument_data(op.instrument.data)
            .custom_request_data(op.custom_request_data)
            .plugin_config_data(entry.config().clone())
            .build()?;

        let capability = entry
            .plugin()
            .reserve()
            .ok_or_else(|| unsupported(&op.instrument.provider, Capability::Reserve))?;

        debug!(order = %op.order_id, provider = %op.instrument.provider, "dispatching reserve");
        let outcome = capability.reserve(request).await;

        self.settle(
            &op.order_id,
            history,
            TransactionType::Reserve,
            op.amount,
            request_id,
            outcome,
        )
        .await
    }

    /// Changes the amount of the order's reservation.
    pub async fn modify_reservation(
        &self,
        op: ModifyOrderReservation,
    ) -> Result<PaymentEvent, PaymentError> {
        let lock = self.order_lock(&op.order_id);
        let _guard = lock.lock().await;

        let history = self.store.load(&op.order_id).await?;
        let request_id = op.request_id.unwrap_or_default();
        if let Some(existing) = replayed_event(&history, request_id) {
            return Ok(existing.clone());
        }

        let entry = self.registry.get(&op.instrument.provider)?;
        let mut builder = ModifyReservationRequest::builder()
            .amount(op.amount)
            .order_context(op.order_context)
            .payment_instrument_data(op.instrument.data)
            .custom_request_data(op.custom_request_data)
            .plugin_config_data(entry.config().clone());
        if let Some(anchor) = latest_reservation(&history) {
            builder =
                builder.reservation_data(ReservationData::new(anchor.continuation_data.clone()));
        }
        let request = builder.build()?;

        let capability = entry
            .plugin()
            .modify_reservation()
            .ok_or_else(|| unsupported(&op.instrument.provider, Capability::ModifyReservation))?;

        debug!(order = %op.order_id, provider = %op.instrument.provider, "dispatching modify reservation");
        let outcome = capability.modify_reservation(request).await;

        self.settle(
            &op.order_id,
            history,
            TransactionType::ModifyReservation,
            op.amount,
            request_id,
            outcome,
        )
        .await
    }

    /// Releases the order's reservation without settlement.
    pub async fn cancel_reservation(
        &self,
        op: CancelOrderReservation,
    ) -> Result<PaymentEvent, PaymentError> {
        let lock = self.order_lock(&op.order_id);
        let _guard = lock.lock().await;

        let history = self.store.load(&op.order_id).await?;
        let request_id = op.request_id.unwrap_or_default();
        if let Some(existing) = replayed_event(&history, request_id) {
            return Ok(existing.clone());
        }

        let entry = self.registry.get(&op.instrument.provider)?;
        // The cancellation always covers the most recent approved
        // reservation state in full.
        let anchor = latest_reservation(&history);
        let amount = anchor.map(|event| event.amount);

        let mut builder = CancelReservationRequest::builder()
            .order_context(op.order_context)
            .payment_instrument_data(op.instrument.data)
            .custom_request_data(op.custom_request_data)
            .plugin_config_data(entry.config().clone());
        if let Some(anchor) = anchor {
            builder =
                builder.reservation_data(ReservationData::new(anchor.continuation_data.clone()));
        }
        if let Some(amount) = amount {
            builder = builder.amount(amount);
        }
        let request = builder.build()?;
        let amount = request.amount;

        let capability = entry
            .plugin()
            .cancel_reservation()
            .ok_or_else(|| unsupported(&op.instrument.provider, Capability::CancelReservation))?;

        debug!(order = %op.order_id, provider = %op.instrument.provider, "dispatching cancel reservation");
        let outcome = capability.cancel_reservation(request).await;

        self.settle(
            &op.order_id,
            history,
            TransactionType::CancelReservation,
            amount,
            request_id,
            outcome,
        )
        .await
    }

    /// Settles reserved funds.
    pub async fn charge(&self, op: ChargeOrder) -> Result<PaymentEvent, PaymentError> {
        let lock = self.order_lock(&op.order_id);
        let _guard = lock.lock().await;

        let history = self.store.load(&op.order_id).await?;
        let request_id = op.request_id.unwrap_or_default();
        if let Some(existing) = replayed_event(&history, request_id) {
            return Ok(existing.clone());
        }

        let entry = self.registry.get(&op.instrument.provider)?;
        let mut builder = ChargeRequest::builder()
            .amount(op.amount)
            .order_context(op.order_context)
            .payment_instrument_data(op.instrument.data)
            .custom_request_data(op.custom_request_data)
            .plugin_config_data(entry.config().clone());
        if let Some(anchor) = latest_reservation(&history) {
            builder =
                builder.reservation_data(ReservationData::new(anchor.continuation_data.clone()));
        }
        let request = builder.build()?;

        let capability = entry
            .plugin()
            .charge()
            .ok_or_else(|| unsupported(&op.instrument.provider, Capability::Charge))?;

        debug!(order = %op.order_id, provider = %op.instrument.provider, "dispatching charge");
        let outcome = capability.charge(request).await;

        self.settle(
            &op.order_id,
            history,
            TransactionType::Charge,
            op.amount,
            request_id,
            outcome,
        )
        .await
    }

    /// Undoes the order's settled charge in full.
    pub async fn reverse_charge(
        &self,
        op: ReverseOrderCharge,
    ) -> Result<PaymentEvent, PaymentError> {
        let lock = self.order_lock(&op.order_id);
        let _guard = lock.lock().await;

        let history = self.store.load(&op.order_id).await?;
        let request_id = op.request_id.unwrap_or_default();
        if let Some(existing) = replayed_event(&history, request_id) {
            return Ok(existing.clone());
        }

        let entry = self.registry.get(&op.instrument.provider)?;
        // The reversal is always for the full charged amount.
        let anchor = latest_charge(&history);
        let amount = anchor.map(|event| event.amount);

        let mut builder = ReverseChargeRequest::builder()
            .order_context(op.order_context)
            .payment_instrument_data(op.instrument.data)
            .custom_request_data(op.custom_request_data)
            .plugin_config_data(entry.config().clone());
        if let Some(anchor) = anchor {
            builder = builder.charge_data(ChargeData::new(anchor.continuation_data.clone()));
        }
        let request = builder.build()?;
        let amount = amount.ok_or(RequestBuildError::MissingField("charge_data"))?;

        let capability = entry
            .plugin()
            .reverse_charge()
            .ok_or_else(|| unsupported(&op.instrument.provider, Capability::ReverseCharge))?;

        debug!(order = %op.order_id, provider = %op.instrument.provider, "dispatching reverse charge");
        let outcome = capability.reverse_charge(request).await;

        self.settle(
            &op.order_id,
            history,
            TransactionType::ReverseCharge,
            amount,
            request_id,
            outcome,
        )
        .await
    }

    /// Returns money to the customer after settlement.
    pub async fn credit(&self, op: CreditOrder) -> Result<PaymentEvent, PaymentError> {
        let lock = self.order_lock(&op.order_id);
        let _guard = lock.lock().await;

        let history = self.store.load(&op.order_id).await?;
        let request_id = op.request_id.unwrap_or_default();
        if let Some(existing) = replayed_event(&history, request_id) {
            return Ok(existing.clone());
        }

        let entry = self.registry.get(&op.instrument.provider)?;
        let mut builder = CreditRequest::builder()
            .amount(op.amount)
            .order_context(op.order_context)
            .payment_instrument_data(op.instrument.data)
            .custom_request_data(op.custom_request_data)
            .plugin_config_data(entry.config().clone());
        if let Some(anchor) = latest_charge(&history) {
            builder = builder.charge_data(ChargeData::new(anchor.continuation_data.clone()));
        }
        let request = builder.build()?;

        let capability = entry
            .plugin()
            .credit()
            .ok_or_else(|| unsupported(&op.instrument.provider, Capability::Credit))?;

        debug!(order = %op.order_id, provider = %op.instrument.provider, "dispatching credit");
        let outcome = capability.credit(request).await;

        self.settle(
            &op.order_id,
            history,
            TransactionType::Credit,
            op.amount,
            request_id,
            outcome,
        )
        .await
    }

    /// Creates a payment instrument with a provider. Order-independent;
    /// never enters any payment history.
    pub async fn create_instrument(
        &self,
        provider_id: &ProviderId,
        mut request: CreateInstrumentRequest,
    ) -> Result<CreatedInstrument, PaymentError> {
        let entry = self.registry.get(provider_id)?;
        let capability = entry
            .plugin()
            .create_instrument()
            .ok_or_else(|| unsupported(provider_id, Capability::CreateInstrument))?;

        request.plugin_config_data = entry.config().clone();
        capability
            .create_instrument(request)
            .await
            .map_err(|failure| {
                warn!(provider = %provider_id, diagnostic = %failure.internal_message,
                    "instrument creation failed");
                classify(failure, None)
            })
    }

    /// Fetches the client-interaction instructions needed before an
    /// instrument can be created.
    pub async fn instrument_creation_instructions(
        &self,
        provider_id: &ProviderId,
        mut request: InstrumentInstructionsRequest,
    ) -> Result<InstrumentInstructions, PaymentError> {
        let entry = self.registry.get(provider_id)?;
        let capability = entry
            .plugin()
            .instrument_instructions()
            .ok_or_else(|| unsupported(provider_id, Capability::InstrumentInstructions))?;

        request.plugin_config_data = entry.config().clone();
        capability
            .instrument_instructions(request)
            .await
            .map_err(|failure| {
                warn!(provider = %provider_id, diagnostic = %failure.internal_message,
                    "instrument instructions request failed");
                classify(failure, None)
            })
    }

    /// Read-only view of an order's full payment history for audit and
    /// display.
    pub async fn payment_history(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<PaymentEvent>, PaymentError> {
        Ok(self.store.load(order_id).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bookkeeping
    // ─────────────────────────────────────────────────────────────────────────

    fn order_lock(&self, order_id: &OrderId) -> Arc<Mutex<()>> {
        self.locks
            .entry(order_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Interprets a capability outcome: records the resulting event (if
    /// any), re-validates the history and classifies the error surface.
    ///
    /// Caller must hold the order lock.
    async fn settle(
        &self,
        order_id: &OrderId,
        history: Vec<PaymentEvent>,
        transaction_type: TransactionType,
        amount: Money,
        request_id: RequestId,
        outcome: CapabilityResult,
    ) -> Result<PaymentEvent, PaymentError> {
        match outcome {
            Ok(response) => {
                let status = if response.request_hold {
                    PaymentStatus::Skipped
                } else {
                    PaymentStatus::Approved
                };
                let event = PaymentEvent::succeeded(
                    transaction_type,
                    status,
                    amount,
                    response.processed_at,
                    response.data,
                    request_id,
                );
                self.commit(order_id, history, event).await
            }
            Err(failure) if failure.temporary => {
                warn!(order = %order_id, tx = %transaction_type,
                    diagnostic = %failure.internal_message, "temporary capability failure");
                // No financial effect is assumed, so nothing is recorded -
                // unless the plugin's contract documents partial effect.
                if failure.partial_effect {
                    let event = PaymentEvent::failed(
                        transaction_type,
                        amount,
                        request_id,
                        failure.internal_message.clone(),
                        failure.external_message.clone(),
                    );
                    self.commit(order_id, history, event).await?;
                }
                Err(PaymentError::Temporary {
                    external_message: failure.external_message,
                    request_id: Some(request_id),
                })
            }
            Err(failure) => {
                warn!(order = %order_id, tx = %transaction_type,
                    diagnostic = %failure.internal_message, "permanent capability failure");
                let event = PaymentEvent::failed(
                    transaction_type,
                    amount,
                    request_id,
                    failure.internal_message,
                    failure.external_message.clone(),
                );
                self.commit(order_id, history, event).await?;
                Err(PaymentError::Permanent {
                    external_message: failure.external_message,
                })
            }
        }
    }

    /// Validates the extended history and appends the event. A validation
    /// failure aborts the write with the prior history untouched.
    async fn commit(
        &self,
        order_id: &OrderId,
        mut history: Vec<PaymentEvent>,
        event: PaymentEvent,
    ) -> Result<PaymentEvent, PaymentError> {
        history.push(event.clone());
        self.validator.validate(&history)?;
        self.store.append(order_id, event.clone()).await?;
        info!(order = %order_id, tx = %event.transaction_type, status = ?event.status,
            amount = %event.amount, "payment event committed");
        Ok(event)
    }
}

/// The most recent approved reservation-state event; its continuation data
/// is the `reservation_data` bundle for dependent follow-ups.
fn latest_reservation(history: &[PaymentEvent]) -> Option<&PaymentEvent> {
    history.iter().rev().find(|event| {
        event.is_approved()
            && matches!(
                event.transaction_type,
                TransactionType::Reserve | TransactionType::ModifyReservation
            )
    })
}

/// The most recent approved charge event; its continuation data is the
/// `charge_data` bundle for reversals and credits.
fn latest_charge(history: &[PaymentEvent]) -> Option<&PaymentEvent> {
    history
        .iter()
        .rev()
        .find(|event| event.is_approved() && event.transaction_type == TransactionType::Charge)
}

/// An already-committed effective event for this request id, if any.
/// Retries of a temporary failure reuse the id, so a retry that raced a
/// slow success must not dispatch twice.
fn replayed_event(history: &[PaymentEvent], request_id: RequestId) -> Option<&PaymentEvent> {
    history.iter().find(|event| {
        event.originating_request_id == request_id
            && matches!(
                event.status,
                PaymentStatus::Approved | PaymentStatus::Skipped
            )
    })
}

fn unsupported(provider: &ProviderId, capability: Capability) -> ConfigurationError {
    ConfigurationError::UnsupportedCapability {
        provider: provider.clone(),
        capability,
    }
}

fn classify(
    failure: payment_types::CapabilityFailure,
    request_id: Option<RequestId>,
) -> PaymentError {
    if failure.temporary {
        PaymentError::Temporary {
            external_message: failure.external_message,
            request_id,
        }
    } else {
        PaymentError::Permanent {
            external_message: failure.external_message,
        }
    }
}
