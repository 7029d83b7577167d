//! Non-negative amount check.

use payment_types::PaymentEvent;

use super::{PaymentEventValidator, ValidationError};

/// Rejects any event with a negative amount.
///
/// Direction of money movement is expressed by the transaction type, never
/// by the sign of the amount.
pub struct NonNegativeAmountValidator;

impl PaymentEventValidator for NonNegativeAmountValidator {
    fn validate(&self, events: &[PaymentEvent]) -> Result<(), ValidationError> {
        for event in events {
            if event.amount.is_negative() {
                return Err(ValidationError::NegativeAmount {
                    transaction_type: event.transaction_type,
                    amount: event.amount.amount(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::event;
    use chrono::Utc;
    use payment_types::{Currency, PaymentStatus, TransactionType};

    #[test]
    fn test_negative_amount_rejected_regardless_of_sequence() {
        let now = Utc::now();
        let history = vec![
            event(TransactionType::Reserve, PaymentStatus::Approved, 10_000, Currency::USD, now),
            event(TransactionType::Charge, PaymentStatus::Approved, -1_000, Currency::USD, now),
        ];

        assert_eq!(
            NonNegativeAmountValidator.validate(&history),
            Err(ValidationError::NegativeAmount {
                transaction_type: TransactionType::Charge,
                amount: -1_000,
            })
        );
    }

    #[test]
    fn test_zero_amount_passes() {
        let now = Utc::now();
        let history = vec![event(
            TransactionType::Reserve,
            PaymentStatus::Approved,
            0,
            Currency::USD,
            now,
        )];
        assert!(NonNegativeAmountValidator.validate(&history).is_ok());
    }
}
