//! Provider plugin contract.
//!
//! One trait per capability; a provider implements any subset. The core
//! discovers what a plugin supports at runtime through the accessor
//! methods and dispatches by lookup, never by downcasting. All I/O to the
//! processor lives inside the plugin - the core only invokes and keeps the
//! books.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::capability::{
    CancelReservationRequest, CapabilityFailure, CapabilityResult, ChargeRequest,
    CreateInstrumentRequest, CreatedInstrument, CreditRequest, InstrumentInstructions,
    InstrumentInstructionsRequest, ModifyReservationRequest, ReserveRequest,
    ReverseChargeRequest,
};

/// One discrete payment operation a provider plugin may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    Reserve,
    ModifyReservation,
    CancelReservation,
    Charge,
    ReverseCharge,
    Credit,
    CreateInstrument,
    InstrumentInstructions,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Reserve => write!(f, "RESERVE"),
            Capability::ModifyReservation => write!(f, "MODIFY_RESERVATION"),
            Capability::CancelReservation => write!(f, "CANCEL_RESERVATION"),
            Capability::Charge => write!(f, "CHARGE"),
            Capability::ReverseCharge => write!(f, "REVERSE_CHARGE"),
            Capability::Credit => write!(f, "CREDIT"),
            Capability::CreateInstrument => write!(f, "CREATE_INSTRUMENT"),
            Capability::InstrumentInstructions => write!(f, "INSTRUMENT_INSTRUCTIONS"),
        }
    }
}

/// Reserves funds against a payment instrument.
#[async_trait]
pub trait ReserveCapability: Send + Sync {
    async fn reserve(&self, request: ReserveRequest) -> CapabilityResult;
}

/// Changes the amount of an existing reservation.
#[async_trait]
pub trait ModifyReservationCapability: Send + Sync {
    async fn modify_reservation(&self, request: ModifyReservationRequest) -> CapabilityResult;
}

/// Releases a reservation without settlement.
#[async_trait]
pub trait CancelReservationCapability: Send + Sync {
    async fn cancel_reservation(&self, request: CancelReservationRequest) -> CapabilityResult;
}

/// Settles reserved funds.
#[async_trait]
pub trait ChargeCapability: Send + Sync {
    async fn charge(&self, request: ChargeRequest) -> CapabilityResult;
}

/// Undoes a settled charge in full.
#[async_trait]
pub trait ReverseChargeCapability: Send + Sync {
    async fn reverse_charge(&self, request: ReverseChargeRequest) -> CapabilityResult;
}

/// Returns money to the customer after settlement.
#[async_trait]
pub trait CreditCapability: Send + Sync {
    async fn credit(&self, request: CreditRequest) -> CapabilityResult;
}

/// Creates a payment instrument with the provider.
#[async_trait]
pub trait CreateInstrumentCapability: Send + Sync {
    async fn create_instrument(
        &self,
        request: CreateInstrumentRequest,
    ) -> Result<CreatedInstrument, CapabilityFailure>;
}

/// Supplies the client-interaction instructions needed before instrument
/// creation.
#[async_trait]
pub trait InstrumentInstructionsCapability: Send + Sync {
    async fn instrument_instructions(
        &self,
        request: InstrumentInstructionsRequest,
    ) -> Result<InstrumentInstructions, CapabilityFailure>;
}

/// The surface a provider integration implements.
///
/// Each accessor returns `Some` only when the capability is supported;
/// defaults say "unsupported" so a plugin implements just the subset it
/// has.
pub trait PaymentProviderPlugin: Send + Sync {
    /// Human-readable plugin name for diagnostics.
    fn name(&self) -> &str;

    fn reserve(&self) -> Option<&dyn ReserveCapability> {
        None
    }

    fn modify_reservation(&self) -> Option<&dyn ModifyReservationCapability> {
        None
    }

    fn cancel_reservation(&self) -> Option<&dyn CancelReservationCapability> {
        None
    }

    fn charge(&self) -> Option<&dyn ChargeCapability> {
        None
    }

    fn reverse_charge(&self) -> Option<&dyn ReverseChargeCapability> {
        None
    }

    fn credit(&self) -> Option<&dyn CreditCapability> {
        None
    }

    fn create_instrument(&self) -> Option<&dyn CreateInstrumentCapability> {
        None
    }

    fn instrument_instructions(&self) -> Option<&dyn InstrumentInstructionsCapability> {
        None
    }

    /// The set of capabilities this plugin actually implements.
    fn supported_capabilities(&self) -> Vec<Capability> {
        let mut capabilities = Vec::new();
        if self.reserve().is_some() {
            capabilities.push(Capability::Reserve);
        }
        if self.modify_reservation().is_some() {
            capabilities.push(Capability::ModifyReservation);
        }
        if self.cancel_reservation().is_some() {
            capabilities.push(Capability::CancelReservation);
        }
        if self.charge().is_some() {
            capabilities.push(Capability::Charge);
        }
        if self.reverse_charge().is_some() {
            capabilities.push(Capability::ReverseCharge);
        }
        if self.credit().is_some() {
            capabilities.push(Capability::Credit);
        }
        if self.create_instrument().is_some() {
            capabilities.push(Capability::CreateInstrument);
        }
        if self.instrument_instructions().is_some() {
            capabilities.push(Capability::InstrumentInstructions);
        }
        capabilities
    }

    /// Returns true if the plugin implements the given capability.
    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Reserve => self.reserve().is_some(),
            Capability::ModifyReservation => self.modify_reservation().is_some(),
            Capability::CancelReservation => self.cancel_reservation().is_some(),
            Capability::Charge => self.charge().is_some(),
            Capability::ReverseCharge => self.reverse_charge().is_some(),
            Capability::Credit => self.credit().is_some(),
            Capability::CreateInstrument => self.create_instrument().is_some(),
            Capability::InstrumentInstructions => self.instrument_instructions().is_some(),
        }
    }
}
