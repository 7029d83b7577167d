//! Error types shared by the domain and the capability protocol.

use crate::domain::Currency;

/// Monetary-value errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum MoneyError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },
}

/// A capability request builder was asked to construct an incomplete
/// request.
///
/// This is a configuration error: it is never retried and the plugin is
/// never invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestBuildError {
    #[error("Required request field is missing: {0}")]
    MissingField(&'static str),
}
