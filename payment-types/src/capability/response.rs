//! Uniform capability response envelope and failure classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::continuation::OpaqueData;

/// What every money-movement capability returns on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityResponse {
    /// Opaque provider state; becomes the continuation bundle for
    /// dependent follow-ups
    pub data: OpaqueData,
    /// When the processor handled the operation
    pub processed_at: DateTime<Utc>,
    /// Provider asks for dependent settlement to be suspended without
    /// counting as a failure
    pub request_hold: bool,
}

impl CapabilityResponse {
    pub fn new(data: OpaqueData, processed_at: DateTime<Utc>) -> Self {
        Self {
            data,
            processed_at,
            request_hold: false,
        }
    }

    /// Marks the response as requesting a settlement hold.
    pub fn with_hold(mut self) -> Self {
        self.request_hold = true;
        self
    }
}

/// A classified capability failure.
///
/// `temporary` failures are retry-eligible with the same request id;
/// permanent ones need compensation or manual action. Callers only ever
/// see `external_message` - the internal diagnostic goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("capability request failed: {internal_message}")]
pub struct CapabilityFailure {
    /// Diagnostic for operators, never shown to customers
    pub internal_message: String,
    /// User-safe message
    pub external_message: String,
    /// True if the failure is transient and the operation may be retried
    pub temporary: bool,
    /// True if the plugin's contract documents that the processor may have
    /// partially acted on the request; such failures are recorded for
    /// audit even when temporary
    pub partial_effect: bool,
}

impl CapabilityFailure {
    /// A transient processor problem (timeout, 5xx, rate limit).
    pub fn temporary(
        internal_message: impl Into<String>,
        external_message: impl Into<String>,
    ) -> Self {
        Self {
            internal_message: internal_message.into(),
            external_message: external_message.into(),
            temporary: true,
            partial_effect: false,
        }
    }

    /// A durable rejection (insufficient funds, invalid instrument).
    pub fn permanent(
        internal_message: impl Into<String>,
        external_message: impl Into<String>,
    ) -> Self {
        Self {
            internal_message: internal_message.into(),
            external_message: external_message.into(),
            temporary: false,
            partial_effect: false,
        }
    }

    /// Marks the failure as possibly having had a financial effect.
    pub fn with_partial_effect(mut self) -> Self {
        self.partial_effect = true;
        self
    }
}

/// Result alias every capability method returns.
pub type CapabilityResult = Result<CapabilityResponse, CapabilityFailure>;
