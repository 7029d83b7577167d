//! Port traits (interfaces for adapters).
//!
//! These are the contracts that provider plugins and history stores must
//! implement. The application layer depends on these traits, not concrete
//! implementations.

mod plugin;
mod store;

pub use plugin::{
    CancelReservationCapability, Capability, ChargeCapability, CreateInstrumentCapability,
    CreditCapability, InstrumentInstructionsCapability, ModifyReservationCapability,
    PaymentProviderPlugin, ReserveCapability, ReverseChargeCapability,
};
pub use store::{HistoryStore, StoreError};
