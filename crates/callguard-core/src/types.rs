//! Parameter contract definitions.
//!
//! Each API method declares the parameters it accepts as a list of
//! [`ParameterSpec`]s. The list is fixed per call site and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind a parameter value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
    ArrayBuffer,
    /// Base-10 integer carried as a string.
    Amount,
    Object,
}

impl ParamKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::ArrayBuffer => "array-buffer",
            ParamKind::Amount => "amount",
            ParamKind::Object => "object",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared contract of a single named parameter.
///
/// A spec without a kind only checks presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ParamKind>,
    #[serde(default)]
    pub obligatory: bool,
    #[serde(default)]
    pub allow_empty: bool,
}

impl ParameterSpec {
    /// An optional parameter of the given kind.
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
            obligatory: false,
            allow_empty: false,
        }
    }

    /// An optional parameter with no kind constraint.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            obligatory: false,
            allow_empty: false,
        }
    }

    /// Mark the parameter as required.
    pub fn obligatory(mut self) -> Self {
        self.obligatory = true;
        self
    }

    /// Accept empty arrays.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = ParameterSpec::new("inputs", ParamKind::Array)
            .obligatory()
            .allow_empty();
        assert_eq!(spec.name, "inputs");
        assert_eq!(spec.kind, Some(ParamKind::Array));
        assert!(spec.obligatory);
        assert!(spec.allow_empty);
    }

    #[test]
    fn test_deserialize_spec_list() {
        let specs: Vec<ParameterSpec> = serde_json::from_str(
            r#"[
                { "name": "path", "obligatory": true },
                { "name": "payload", "type": "array-buffer" },
                { "name": "outputs", "type": "array", "allowEmpty": true }
            ]"#,
        )
        .unwrap();

        assert_eq!(specs[0].kind, None);
        assert!(specs[0].obligatory);
        assert_eq!(specs[1].kind, Some(ParamKind::ArrayBuffer));
        assert!(!specs[1].obligatory);
        assert!(specs[2].allow_empty);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ParamKind::ArrayBuffer.to_string(), "array-buffer");
        assert_eq!(ParamKind::Amount.to_string(), "amount");
    }
}
