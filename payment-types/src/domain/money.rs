//! Type-safe monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MoneyError;

/// Currencies supported by the payment core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Returns the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::USD | Currency::EUR | Currency::GBP | Currency::CAD => 2,
        }
    }

    /// Returns the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD | Currency::CAD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Type-safe money representation with embedded currency.
///
/// Amount is stored in the smallest unit of the currency (cents, pence,
/// etc.) to avoid floating-point precision issues. Direction of a payment
/// is expressed by its transaction type, never by the sign of the amount;
/// `new` therefore rejects negative values. `from_minor_units` exists to
/// reconstruct historical event amounts verbatim - the negative-amount
/// validator is the gate for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value, rejecting negative amounts.
    pub fn new(amount: i64, currency: Currency) -> Result<Self, MoneyError> {
        if amount < 0 {
            return Err(MoneyError::NegativeAmount);
        }
        Ok(Self { amount, currency })
    }

    /// Reconstructs a Money value from stored fields without the sign check.
    pub fn from_minor_units(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero-value Money for the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Returns the amount in smallest currency unit.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Checked addition - returns error if currencies don't match.
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                got: other.currency,
            });
        }
        Ok(Money {
            amount: self.amount.saturating_add(other.amount),
            currency: self.currency,
        })
    }

    /// Checked subtraction - returns error if currencies don't match or the
    /// result would be negative.
    pub fn checked_sub(&self, other: Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                got: other.currency,
            });
        }
        if self.amount < other.amount {
            return Err(MoneyError::NegativeAmount);
        }
        Ok(Money {
            amount: self.amount - other.amount,
            currency: self.currency,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.amount / 100;
        let minor = (self.amount % 100).abs();
        write!(f, "{}{}.{:02}", self.currency.symbol(), major, minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let money = Money::new(1000, Currency::USD).unwrap();
        assert_eq!(money.amount(), 1000);
        assert_eq!(money.currency(), Currency::USD);
    }

    #[test]
    fn test_negative_money_fails() {
        let result = Money::new(-100, Currency::USD);
        assert!(matches!(result, Err(MoneyError::NegativeAmount)));
    }

    #[test]
    fn test_from_minor_units_allows_negative() {
        let money = Money::from_minor_units(-100, Currency::USD);
        assert!(money.is_negative());
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(100, Currency::USD).unwrap();
        let b = Money::new(50, Currency::USD).unwrap();
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.amount(), 150);
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(100, Currency::USD).unwrap();
        let eur = Money::new(50, Currency::EUR).unwrap();
        let result = usd.checked_add(eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(1050, Currency::USD).unwrap();
        assert_eq!(format!("{}", money), "$10.50");
    }
}
