//! Capability request/response protocol.
//!
//! Typed requests per operation, a uniform response envelope and the
//! opaque continuation-data carriers that thread provider state from an
//! originating operation into its dependent follow-ups.

pub mod continuation;
pub mod requests;
pub mod response;

pub use continuation::{ChargeData, OpaqueData, ReservationData};
pub use requests::{
    CancelReservationRequest, ChargeRequest, CreateInstrumentRequest, CreatedInstrument,
    CreditRequest, InstrumentInstructions, InstrumentInstructionsRequest,
    ModifyReservationRequest, ReserveRequest, ReverseChargeRequest,
};
pub use response::{CapabilityFailure, CapabilityResponse, CapabilityResult};
