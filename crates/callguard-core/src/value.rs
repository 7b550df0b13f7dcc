//! Caller-supplied parameter values.
//!
//! A [`ValueBag`] is what a method call hands to the validator: a mapping
//! from parameter name to a [`ParamValue`]. Bags are usually built from the
//! JSON payload of an API call, with binary buffers added explicitly since
//! JSON has no binary type.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde_json::Number;

/// A single caller-supplied value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<ParamValue>),
    /// Raw binary buffer.
    Bytes(Bytes),
    Object(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Short name of the value's kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Number(_) => "number",
            ParamValue::String(_) => "string",
            ParamValue::Array(_) => "array",
            ParamValue::Bytes(_) => "array-buffer",
            ParamValue::Object(_) => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ParamValue::Null,
            serde_json::Value::Bool(b) => ParamValue::Bool(b),
            serde_json::Value::Number(n) => ParamValue::Number(n),
            serde_json::Value::String(s) => ParamValue::String(s),
            serde_json::Value::Array(items) => {
                ParamValue::Array(items.into_iter().map(ParamValue::from).collect())
            }
            serde_json::Value::Object(map) => ParamValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Number(n.into())
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        ParamValue::Number(n.into())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Number(n.into())
    }
}

impl From<Bytes> for ParamValue {
    fn from(b: Bytes) -> Self {
        ParamValue::Bytes(b)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(b: Vec<u8>) -> Self {
        ParamValue::Bytes(Bytes::from(b))
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(items: Vec<ParamValue>) -> Self {
        ParamValue::Array(items)
    }
}

/// Named parameters of a single method call.
///
/// Keys that no parameter spec declares are carried but never inspected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueBag(BTreeMap<String, ParamValue>);

impl ValueBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from a JSON object. Returns `None` for any other JSON value.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match ParamValue::from(value) {
            ParamValue::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Add a value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ValueBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object() {
        let bag = ValueBag::from_json(json!({
            "path": [2147483692u32, 2147483648u32],
            "coin": "btc",
            "showOnTrezor": false,
            "extra": null,
        }))
        .unwrap();

        assert_eq!(bag.len(), 4);
        assert_eq!(bag.get("coin").and_then(ParamValue::as_str), Some("btc"));
        assert_eq!(
            bag.get("path").and_then(ParamValue::as_array).map(<[ParamValue]>::len),
            Some(2)
        );
        assert_eq!(bag.get("showOnTrezor"), Some(&ParamValue::Bool(false)));
        assert_eq!(bag.get("extra"), Some(&ParamValue::Null));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(ValueBag::from_json(json!([1, 2, 3])).is_none());
        assert!(ValueBag::from_json(json!("coin")).is_none());
    }

    #[test]
    fn test_builder_and_type_names() {
        let bag = ValueBag::new()
            .with("payload", vec![0xde_u8, 0xad])
            .with("amount", "1000")
            .with("index", 3u32);

        assert_eq!(bag.get("payload").map(ParamValue::type_name), Some("array-buffer"));
        assert_eq!(bag.get("amount").map(ParamValue::type_name), Some("string"));
        assert_eq!(bag.get("index").map(ParamValue::type_name), Some("number"));
        assert!(!bag.contains("missing"));
    }
}
