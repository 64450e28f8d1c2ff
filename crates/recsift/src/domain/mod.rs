//! Domain types for record querying.
//!
//! A [`Record`] is one object from the input array. It has no fixed schema:
//! queries address fields by name and the value is whatever JSON the input
//! carried.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names accepted by the strict query grammar.
pub const KNOWN_FIELDS: [&str; 3] = ["region", "city", "number"];

/// Fields whose condition values the strict grammar coerces to numbers.
pub const NUMERIC_FIELDS: [&str; 1] = ["number"];

/// One record from the input array, keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Is `key` a field the strict grammar accepts?
pub fn is_known_field(key: &str) -> bool {
    KNOWN_FIELDS.contains(&key)
}

/// Does the strict grammar treat `key` as numeric?
pub fn is_numeric_field(key: &str) -> bool {
    NUMERIC_FIELDS.contains(&key)
}
