//! Typed widget values.
//!
//! A stored value is either a boolean (checkbox, switch) or a string (select,
//! text). Which one a given entry holds is decided by the control kind it is
//! paired with; see [`crate::codec`] for the rules that interpret it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single control value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Bool(bool),
    Text(String),
}

impl StoredValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoredValue::Bool(b) => Some(*b),
            StoredValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            StoredValue::Bool(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, StoredValue::Text(_))
    }
}

impl Default for StoredValue {
    fn default() -> Self {
        StoredValue::Bool(false)
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        StoredValue::Bool(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_string())
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::Text(value)
    }
}

/// Live state of a Multi-choice container, keyed by option value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap(BTreeMap<String, StoredValue>);

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&StoredValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StoredValue>) {
        self.0.insert(key.into(), value.into());
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoredValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<String>,
    V: Into<StoredValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Live state of a Grid-choice container. Every entry is boolean.
pub type GridValues = BTreeMap<String, bool>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_keeps_kind() {
        let map: ValueMap = serde_json::from_str(r#"{"a": true, "b": "x"}"#).unwrap();
        assert_eq!(map.get("a"), Some(&StoredValue::Bool(true)));
        assert_eq!(map.get("b"), Some(&StoredValue::Text("x".into())));
    }

    #[test]
    fn accessors_do_not_coerce() {
        assert_eq!(StoredValue::Bool(true).as_str(), None);
        assert_eq!(StoredValue::from("true").as_bool(), None);
    }

    #[test]
    fn collects_from_pairs() {
        let map: ValueMap = [("a", StoredValue::Bool(false)), ("b", "".into())]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
