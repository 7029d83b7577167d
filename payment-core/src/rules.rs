//! Sequence rule table.
//!
//! Maps each transaction type to the set of types legally allowed to
//! follow an APPROVED event of that type. Supplied externally (and
//! deserializable from configuration) so provider or regulatory variation
//! needs no code change; an unknown type or missing entry means "no
//! follow-up permitted".

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use payment_types::TransactionType;

/// Configuration of legal transaction-type successions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceRuleTable(HashMap<TransactionType, HashSet<TransactionType>>);

impl SequenceRuleTable {
    /// Creates a table from an explicit mapping.
    pub fn new(rules: HashMap<TransactionType, HashSet<TransactionType>>) -> Self {
        Self(rules)
    }

    /// The default shipped rule set.
    pub fn standard() -> Self {
        use TransactionType::*;

        let mut rules = HashMap::new();
        rules.insert(
            Reserve,
            HashSet::from([ModifyReservation, CancelReservation, Charge]),
        );
        rules.insert(
            ModifyReservation,
            HashSet::from([ModifyReservation, CancelReservation, Charge]),
        );
        rules.insert(Charge, HashSet::from([ReverseCharge, Credit]));
        Self(rules)
    }

    /// Returns true if `next` may follow an approved event of type `from`.
    pub fn allows(&self, from: TransactionType, next: TransactionType) -> bool {
        self.0
            .get(&from)
            .is_some_and(|followers| followers.contains(&next))
    }

    /// The set of legal followers for a type, if any.
    pub fn followers(&self, from: TransactionType) -> Option<&HashSet<TransactionType>> {
        self.0.get(&from)
    }
}

impl Default for SequenceRuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payment_types::TransactionType::*;

    #[test]
    fn test_standard_rules() {
        let table = SequenceRuleTable::standard();

        assert!(table.allows(Reserve, Charge));
        assert!(table.allows(Reserve, ModifyReservation));
        assert!(table.allows(Reserve, CancelReservation));
        assert!(table.allows(ModifyReservation, Charge));
        assert!(table.allows(Charge, ReverseCharge));
        assert!(table.allows(Charge, Credit));

        assert!(!table.allows(Reserve, Credit));
        assert!(!table.allows(Charge, Charge));
    }

    #[test]
    fn test_missing_entry_permits_nothing() {
        let table = SequenceRuleTable::standard();
        assert!(table.followers(CancelReservation).is_none());
        assert!(!table.allows(CancelReservation, Reserve));
    }

    #[test]
    fn test_deserializes_from_configuration() {
        let json = r#"{"RESERVE": ["CHARGE"], "CHARGE": ["REVERSE_CHARGE"]}"#;
        let table: SequenceRuleTable = serde_json::from_str(json).unwrap();

        assert!(table.allows(Reserve, Charge));
        assert!(!table.allows(Reserve, ModifyReservation));
        assert!(table.allows(Charge, ReverseCharge));
        assert!(!table.allows(Charge, Credit));
    }
}
