//! Transition legality check.

use payment_types::{PaymentEvent, TransactionType};

use super::{PaymentEventValidator, ValidationError};
use crate::rules::SequenceRuleTable;

/// Checks the event-type sequence against the rule table.
///
/// The first event of a non-empty history must be a Reserve. Walking
/// consecutive pairs, whenever the current event is approved the next
/// event's type must be among the legal followers of the current type.
/// Legality is anchored to approved state only - a rejected attempt does
/// not constrain what comes after it.
pub struct SequenceValidator {
    rules: SequenceRuleTable,
}

impl SequenceValidator {
    pub fn new(rules: SequenceRuleTable) -> Self {
        Self { rules }
    }
}

impl PaymentEventValidator for SequenceValidator {
    fn validate(&self, events: &[PaymentEvent]) -> Result<(), ValidationError> {
        let Some(first) = events.first() else {
            return Ok(());
        };
        if first.transaction_type != TransactionType::Reserve {
            return Err(ValidationError::FirstEventNotReserve {
                found: first.transaction_type,
            });
        }
        for pair in events.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if current.is_approved()
                && !self
                    .rules
                    .allows(current.transaction_type, next.transaction_type)
            {
                return Err(ValidationError::IllegalTransition {
                    from: current.transaction_type,
                    to: next.transaction_type,
                });
            }
        }
        Ok(())
    }
}
