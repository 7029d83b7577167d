//! # Payment Types
//!
//! Domain types, the capability request/response protocol and port traits
//! for the payment-processing core. This crate has ZERO external IO
//! dependencies - only data structures, business rules, and trait
//! definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, PaymentEvent, OrderContext)
//! - `capability/` - Typed capability requests, the response envelope and
//!   opaque continuation-data carriers
//! - `ports/` - Trait definitions that provider plugins and history stores
//!   must implement
//! - `error/` - Configuration and request-building error types

pub mod capability;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use capability::{
    CancelReservationRequest, CapabilityFailure, CapabilityResponse, CapabilityResult, ChargeData,
    ChargeRequest, CreateInstrumentRequest, CreatedInstrument, CreditRequest,
    InstrumentInstructions, InstrumentInstructionsRequest, ModifyReservationRequest, OpaqueData,
    ReservationData, ReserveRequest, ReverseChargeRequest,
};
pub use domain::{
    Currency, EventId, Money, OrderContext, OrderId, PaymentEvent, PaymentInstrument,
    PaymentStatus, ProviderId, RequestId, TransactionType,
};
pub use error::{MoneyError, RequestBuildError};
pub use ports::{
    CancelReservationCapability, Capability, ChargeCapability, CreateInstrumentCapability,
    CreditCapability, HistoryStore, InstrumentInstructionsCapability,
    ModifyReservationCapability, PaymentProviderPlugin, ReserveCapability,
    ReverseChargeCapability, StoreError,
};
