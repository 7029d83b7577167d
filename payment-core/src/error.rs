//! Error types for the orchestrator.
//!
//! Every failure reaches the caller as one of four distinguishable kinds
//! (configuration, validation, temporary, permanent) plus the persistence
//! fault, so outer layers can choose a retry affordance, a hard failure or
//! reconciliation.

use payment_types::{Capability, ProviderId, RequestBuildError, RequestId, StoreError};

use crate::validation::ValidationError;

/// Setup problems: never retried, the plugin is never invoked.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Request(#[from] RequestBuildError),

    #[error("No payment provider configured with id {0}")]
    UnknownProvider(ProviderId),

    #[error("Provider {provider} does not support the {capability} capability")]
    UnsupportedCapability {
        provider: ProviderId,
        capability: Capability,
    },
}

/// What an orchestrator operation can fail with.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transient processor issue; retry with the same request id so the
    /// plugin/processor side can de-duplicate.
    #[error("Temporary payment failure: {external_message}")]
    Temporary {
        external_message: String,
        request_id: Option<RequestId>,
    },

    /// Durable rejection; the internal diagnostic is logged, the caller
    /// only sees the plugin's external message.
    #[error("Payment failed: {external_message}")]
    Permanent { external_message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PaymentError {
    /// True when an automatic retry (with the same request id) is
    /// appropriate.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Temporary { .. })
    }
}

impl From<RequestBuildError> for PaymentError {
    fn from(err: RequestBuildError) -> Self {
        PaymentError::Configuration(ConfigurationError::Request(err))
    }
}
