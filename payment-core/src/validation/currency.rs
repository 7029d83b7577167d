//! Currency consistency check.

use payment_types::PaymentEvent;

use super::{PaymentEventValidator, ValidationError};

/// Rejects a history containing more than one distinct currency code.
pub struct CurrencyValidator;

impl PaymentEventValidator for CurrencyValidator {
    fn validate(&self, events: &[PaymentEvent]) -> Result<(), ValidationError> {
        let mut first = None;
        for event in events {
            let currency = event.amount.currency();
            match first {
                None => first = Some(currency),
                Some(expected) if expected != currency => {
                    return Err(ValidationError::MixedCurrencies {
                        first: expected,
                        other: currency,
                    });
                }
                Some(_) => {}
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
    fn test_single_currency_passes() {
        let now = Utc::now();
        let history = vec![
            event(TransactionType::Reserve, PaymentStatus::Approved, 100, Currency::USD, now),
            event(TransactionType::Charge, PaymentStatus::Approved, 100, Currency::USD, now),
        ];
        assert!(CurrencyValidator.validate(&history).is_ok());
    }

    #[test]
    fn test_mixed_currencies_rejected() {
        let now = Utc::now();
        let history = vec![
            event(TransactionType::Reserve, PaymentStatus::Approved, 100, Currency::USD, now),
            event(TransactionType::Charge, PaymentStatus::Approved, 100, Currency::EUR, now),
        ];

        assert_eq!(
            CurrencyValidator.validate(&history),
            Err(ValidationError::MixedCurrencies {
                first: Currency::USD,
                other: Currency::EUR,
            })
        );
    }
}
