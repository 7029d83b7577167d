//! Opaque continuation-data carriers.
//!
//! Provider plugins stay stateless across calls; the core owns durability.
//! Whatever a plugin returns in a response's `data` is handed back to it
//! verbatim on the dependent follow-up. The core copies these bundles and
//! never parses their contents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An opaque key/value bundle owned by a provider plugin.
///
/// Backed by a `BTreeMap` so serialized forms are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueData(BTreeMap<String, String>);

impl OpaqueData {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a key/value pair, returning self for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up a value. Intended for plugins only; the core never calls
    /// this on continuation bundles.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for OpaqueData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Continuation bundle produced by a Reserve (or ModifyReservation)
/// response, required by ModifyReservation, CancelReservation and Charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationData(OpaqueData);

impl ReservationData {
    pub fn new(data: OpaqueData) -> Self {
        Self(data)
    }

    pub fn as_opaque(&self) -> &OpaqueData {
        &self.0
    }

    pub fn into_opaque(self) -> OpaqueData {
        self.0
    }
}

/// Continuation bundle produced by a Charge response, required by
/// ReverseCharge and Credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChargeData(OpaqueData);

impl ChargeData {
    pub fn new(data: OpaqueData) -> Self {
        Self(data)
    }

    pub fn as_opaque(&self) -> &OpaqueData {
        &self.0
    }

    pub fn into_opaque(self) -> OpaqueData {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_typed_wrapper() {
        let data = OpaqueData::new()
            .with("reservation-id", "res-123")
            .with("processor-ref", "abc");

        let reservation = ReservationData::new(data.clone());
        assert_eq!(reservation.into_opaque(), data);
    }

    #[test]
    fn test_serialized_form_is_deterministic() {
        let data = OpaqueData::new().with("b", "2").with("a", "1");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}
