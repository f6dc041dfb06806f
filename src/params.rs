//! Flat request parameters and a chaining builder for assembling them.
//!
//! Records flatten into [`Params`]; [`ParamBuilder`] adds the surrounding
//! action name, enumerated lists and keyed maps an MWS call needs. Builder
//! methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use mws_datatypes::ParamBuilder;
//! let params = ParamBuilder::new()
//!     .action("GetReportCount")
//!     .set_opt("Acknowledged", Some("false"))
//!     .enumerate("ReportTypeList.Type", ["_GET_FLAT_FILE_OPEN_LISTINGS_DATA_"])
//!     .build();
//! assert!(params.contains_key("ReportTypeList.Type.1"));
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;

use crate::record::{normalize_prefix, Record};

// ---------------------------------------------------------------------------
// ParamValue
// ---------------------------------------------------------------------------

/// A leaf value in a flattened parameter map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Integer(n) => Some(*n as f64),
            ParamValue::Decimal(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    /// Empty text and zero are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            ParamValue::Text(s) => s.is_empty(),
            ParamValue::Integer(n) => *n == 0,
            ParamValue::Decimal(n) => *n == 0.0,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{}", n),
            ParamValue::Decimal(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Text(v.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Integer(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Integer(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Integer(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Decimal(v)
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

/// Flat key/value request parameters, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
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

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Merge `other` into `self`. Key collisions keep the incoming value and
    /// are logged, since well-formed record trees never produce them.
    pub fn merge(&mut self, other: Params) {
        for (key, value) in other.0 {
            if let Some(previous) = self.0.insert(key.clone(), value) {
                tracing::warn!(%key, %previous, "parameter key collision while merging");
            }
        }
    }

    /// Every parameter rendered as a `(key, string)` pair, ready for URL encoding.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// The parameters as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn into_inner(self) -> BTreeMap<String, ParamValue> {
        self.0
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ---------------------------------------------------------------------------
// ParamBuilder
// ---------------------------------------------------------------------------

/// Builds the parameter map for one MWS call.
#[derive(Debug, Default)]
pub struct ParamBuilder {
    params: Params,
}

impl ParamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `Action` parameter.
    pub fn action(&mut self, name: &str) -> &mut Self {
        self.params.insert("Action", name);
        self
    }

    /// Set a single parameter.
    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) -> &mut Self {
        self.params.insert(key, value);
        self
    }

    /// Set a parameter only when a value is present.
    pub fn set_opt<V: Into<ParamValue>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.params.insert(key, v);
        }
        self
    }

    /// Number `values` from 1 under `prefix`: `Prefix.1`, `Prefix.2`, ...
    ///
    /// Adds nothing when every value is falsy (empty text or zero).
    pub fn enumerate<I, V>(&mut self, prefix: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        let values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        if values.iter().all(ParamValue::is_falsy) {
            return self;
        }
        let prefix = normalize_prefix(prefix);
        for (idx, value) in values.into_iter().enumerate() {
            self.params.insert(format!("{}{}", prefix, idx + 1), value);
        }
        self
    }

    /// Number each key/value group from 1 under `prefix`:
    /// `Prefix.1.Key`, `Prefix.2.Key`, ...
    pub fn enumerate_keyed<I, G, K, V>(&mut self, prefix: &str, groups: I) -> &mut Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        let prefix = normalize_prefix(prefix);
        for (idx, group) in groups.into_iter().enumerate() {
            for (key, value) in group {
                self.params
                    .insert(format!("{}{}.{}", prefix, idx + 1, key.as_ref()), value);
            }
        }
        self
    }

    /// Key each pair under `prefix`: `Prefix.Key`.
    pub fn dict_keyed<I, K, V>(&mut self, prefix: &str, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        let prefix = normalize_prefix(prefix);
        for (key, value) in pairs {
            self.params.insert(format!("{}{}", prefix, key.as_ref()), value);
        }
        self
    }

    /// Merge a flattened record under `prefix` (empty for the top level).
    pub fn record<R: Record + ?Sized>(&mut self, prefix: &str, record: &R) -> &mut Self {
        self.params.merge(record.flatten(prefix));
        self
    }

    /// Flatten each record under `Prefix.1`, `Prefix.2`, ...
    pub fn records<'r, I, R>(&mut self, prefix: &str, records: I) -> &mut Self
    where
        I: IntoIterator<Item = &'r R>,
        R: Record + 'r,
    {
        let prefix = normalize_prefix(prefix);
        for (idx, record) in records.into_iter().enumerate() {
            self.params
                .merge(record.flatten(&format!("{}{}", prefix, idx + 1)));
        }
        self
    }

    /// Return the assembled parameters.
    pub fn build(&self) -> Params {
        self.params.clone()
    }
}
