//! Payment event history validators.
//!
//! Four independently-composable checks over one order's full ordered
//! event list. All four run as a set before any write commits; one
//! violation aborts the whole write, so partial histories are never
//! persisted.

mod amount;
mod currency;
mod date;
mod sequence;

use chrono::{DateTime, Utc};

use payment_types::{Currency, PaymentEvent, TransactionType};

use crate::rules::SequenceRuleTable;

pub use amount::NonNegativeAmountValidator;
pub use currency::CurrencyValidator;
pub use date::DateUniquenessValidator;
pub use sequence::SequenceValidator;

/// A history violation; the write that introduced it is rejected and the
/// prior history stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Payment history mixes currencies: {first} and {other}")]
    MixedCurrencies { first: Currency, other: Currency },

    #[error("Duplicate {transaction_type} event date: {occurred_at}")]
    DuplicateEventDate {
        transaction_type: TransactionType,
        occurred_at: DateTime<Utc>,
    },

    #[error("Negative amount on {transaction_type} event: {amount}")]
    NegativeAmount {
        transaction_type: TransactionType,
        amount: i64,
    },

    #[error("First payment event must be RESERVE, found {found}")]
    FirstEventNotReserve { found: TransactionType },

    #[error("Illegal transition: {to} may not follow an approved {from}")]
    IllegalTransition {
        from: TransactionType,
        to: TransactionType,
    },
}

/// One check over an order's full ordered event list.
pub trait PaymentEventValidator: Send + Sync {
    fn validate(&self, events: &[PaymentEvent]) -> Result<(), ValidationError>;
}

/// The composed validator set run before every commit.
pub struct HistoryValidator {
    validators: Vec<Box<dyn PaymentEventValidator>>,
}

impl HistoryValidator {
    /// The standard four validators, with sequence legality driven by the
    /// given rule table.
    pub fn standard(rules: SequenceRuleTable) -> Self {
        Self {
            validators: vec![
                Box::new(CurrencyValidator),
                Box::new(DateUniquenessValidator),
                Box::new(NonNegativeAmountValidator),
                Box::new(SequenceValidator::new(rules)),
            ],
        }
    }

    /// A custom validator set, mainly for tests and per-deployment
    /// overrides.
    pub fn new(validators: Vec<Box<dyn PaymentEventValidator>>) -> Self {
        Self { validators }
    }

    /// Runs every validator; the first violation wins.
    pub fn validate(&self, events: &[PaymentEvent]) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(events)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Utc};

    use payment_types::{
        Currency, Money, OpaqueData, PaymentEvent, PaymentStatus, RequestId, TransactionType,
    };

    pub fn event(
        transaction_type: TransactionType,
        status: PaymentStatus,
        amount: i64,
        currency: Currency,
        occurred_at: DateTime<Utc>,
    ) -> PaymentEvent {
        PaymentEvent::succeeded(
            transaction_type,
            status,
            Money::from_minor_units(amount, currency),
            occurred_at,
            OpaqueData::new(),
            RequestId::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::event;
    use super::*;
    use chrono::{Duration, Utc};
    use payment_types::{Currency, PaymentStatus, TransactionType};

    #[test]
    fn test_valid_history_passes_all_four() {
        let validator = HistoryValidator::standard(SequenceRuleTable::standard());
        let start = Utc::now();
        let history = vec![
            event(
                TransactionType::Reserve,
                PaymentStatus::Approved,
                10_000,
                Currency::USD,
                start,
            ),
            event(
                TransactionType::Charge,
                PaymentStatus::Approved,
                10_000,
                Currency::USD,
                start + Duration::seconds(5),
            ),
        ];

        assert!(validator.validate(&history).is_ok());
    }

    #[test]
    fn test_empty_history_is_valid() {
        let validator = HistoryValidator::standard(SequenceRuleTable::standard());
        assert!(validator.validate(&[]).is_ok());
    }
}
