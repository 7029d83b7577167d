//! # Payment Core
//!
//! Application layer of the payment-processing core: records and validates
//! the chronological sequence of payment events for an order and
//! orchestrates calls to pluggable provider capabilities.
//!
//! ## Architecture
//!
//! - `rules` - Sequence rule table: which transaction types may legally
//!   follow an approved transaction of a given type
//! - `validation/` - Four composable validators over an order's full
//!   event history
//! - `registry` - Configured providers and their plugins
//! - `api` - Operation request DTOs exposed to the outer service layer
//! - `orchestrator` - Per-order serialized dispatch, bookkeeping and
//!   re-validation
//!
//! The orchestrator is generic over `S: HistoryStore` - the persistence
//! adapter is injected at compile time.

pub mod api;
pub mod error;
pub mod orchestrator;
pub mod registry;
pub mod rules;
pub mod validation;


pub use api::{
    CancelOrderReservation, ChargeOrder, CreditOrder, ModifyOrderReservation, ReserveOrder,
    ReverseOrderCharge,
};
pub use error::{ConfigurationError, PaymentError};
pub use orchestrator::PaymentOrchestrator;
pub use registry::ProviderRegistry;
pub use rules::SequenceRuleTable;
pub use validation::{HistoryValidator, PaymentEventValidator, ValidationError};
