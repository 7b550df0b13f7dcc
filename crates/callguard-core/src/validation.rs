//! Call-contract checks: parameter specs and derivation path vs. coin.
//!
//! Both checks run before any device I/O and stop at the first violation.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::coin::CoinDescriptor;
use crate::error::{Result, ValidationError};
use crate::path::coin_type;
use crate::types::{ParamKind, ParameterSpec};
use crate::value::{ParamValue, ValueBag};

/// Validate `values` against `fields`, in list order.
///
/// For each spec:
/// - Absent and obligatory: `Missing`
/// - Absent and optional: skipped
/// - Present: checked against the declared kind, if any
///
/// Keys in `values` that no spec names are ignored.
pub fn validate_params(values: &ValueBag, fields: &[ParameterSpec]) -> Result<()> {
    for field in fields {
        match values.get(&field.name) {
            Some(value) => {
                if let Some(kind) = field.kind {
                    check_kind(field, kind, value)?;
                }
            }
            None if field.obligatory => {
                return Err(ValidationError::Missing {
                    name: field.name.clone(),
                });
            }
            None => {}
        }
    }
    Ok(())
}

fn check_kind(field: &ParameterSpec, kind: ParamKind, value: &ParamValue) -> Result<()> {
    let invalid_type = |expected: &'static str| ValidationError::InvalidType {
        name: field.name.clone(),
        expected,
    };

    match (kind, value) {
        (ParamKind::String, ParamValue::String(_))
        | (ParamKind::Number, ParamValue::Number(_))
        | (ParamKind::Boolean, ParamValue::Bool(_))
        | (ParamKind::ArrayBuffer, ParamValue::Bytes(_)) => Ok(()),

        // Anything reference-like passes as an object, null included.
        (
            ParamKind::Object,
            ParamValue::Object(_) | ParamValue::Array(_) | ParamValue::Bytes(_) | ParamValue::Null,
        ) => Ok(()),

        (ParamKind::Array, ParamValue::Array(items)) => {
            if !field.allow_empty && items.is_empty() {
                Err(ValidationError::Empty {
                    name: field.name.clone(),
                })
            } else {
                Ok(())
            }
        }

        (ParamKind::Amount, ParamValue::String(s)) => {
            if is_integer_amount(s) {
                Ok(())
            } else {
                Err(ValidationError::InvalidAmount {
                    name: field.name.clone(),
                    value: s.clone(),
                })
            }
        }

        (ParamKind::Amount, _) => Err(invalid_type("string")),
        (ParamKind::ArrayBuffer, _) => Err(invalid_type("ArrayBuffer")),
        (kind, _) => Err(invalid_type(kind.as_str())),
    }
}

/// Whether `s` is the canonical base-10 form of an integer.
///
/// The string must survive a parse/print round trip unchanged, which rules
/// out fractions, exponents, leading zeros, `+` signs, `-0` and separators.
pub fn is_integer_amount(s: &str) -> bool {
    BigInt::from_str(s).map_or(false, |n| n.to_string() == s)
}

/// Check that the coin-type segment of `path` names `coin`.
///
/// Without a coin there is nothing to check. A path too short to carry a
/// coin type cannot match.
pub fn validate_coin_path(coin: Option<&CoinDescriptor>, path: &[u32]) -> Result<()> {
    match coin {
        Some(coin) if coin_type(path) != Some(coin.slip44) => {
            Err(ValidationError::CoinPathMismatch)
        }
        _ => Ok(()),
    }
}
