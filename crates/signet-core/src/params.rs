//! Parameter values and parameter sets for outgoing requests

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single request parameter value
///
/// The wire format is untagged JSON: text as strings, integers as
/// numbers, booleans as booleans, lists as arrays, maps as objects.
/// Floats are intentionally not representable - send them as text so the
/// canonical form stays deterministic across platforms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// The text form used as canonicalization input
    ///
    /// Scalars render bare (no quotes); lists and maps render as their
    /// compact JSON encoding, brackets and quotes included. That encoded
    /// form is what deployed servers hash against, so it must not be
    /// normalized further here.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if a list or map value cannot be
    /// encoded.
    pub fn text_form(&self) -> Result<String, serde_json::Error> {
        match self {
            ParamValue::Text(s) => Ok(s.clone()),
            ParamValue::Int(i) => Ok(i.to_string()),
            ParamValue::Bool(b) => Ok(b.to_string()),
            other => serde_json::to_string(other),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(v: Vec<ParamValue>) -> Self {
        ParamValue::List(v)
    }
}

impl From<BTreeMap<String, ParamValue>> for ParamValue {
    fn from(m: BTreeMap<String, ParamValue>) -> Self {
        ParamValue::Map(m)
    }
}

/// An ordered set of request parameters
///
/// Keys are unique; inserting an existing key overwrites it. Iteration
/// order is byte-wise ascending by key, which is exactly the order
/// canonicalization requires, so input order never matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParamValue>);

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, overwriting any existing value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merge another set into this one; entries from `other` win
    pub fn merge(&mut self, other: &ParameterSet) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in byte-wise ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
