//! Untyped construction input
//!
//! Customer records can be built from a JSON object held in memory. This module
//! turns a [`Mapping`] into typed field values, reporting the wrong primitive
//! type as [`CustomerError::Type`] and absent keys as
//! [`CustomerError::MissingFields`].

use serde_json::{Map, Value};

use crate::domain::value_objects::Field;
use crate::error::{CustomerError, CustomerResult, Violation};

/// A JSON object: the untyped shape records are built from
pub type Mapping = Map<String, Value>;

/// A key present in JSON input that no customer field uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
    pub key: String,
}

/// Check that every field in `fields` is present, reporting all absent keys at once.
pub fn require_fields(map: &Mapping, fields: &[Field]) -> CustomerResult<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|field| !map.contains_key(field.key()))
        .map(|field| field.key().to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    tracing::debug!(?missing, "mapping is missing required fields");
    Err(CustomerError::MissingFields(missing))
}

fn wrong_type(field: Field, expected: &'static str) -> CustomerError {
    tracing::debug!(field = field.key(), expected, "rejected field type");
    CustomerError::Type { field, expected }
}

fn present(map: &Mapping, field: Field) -> CustomerResult<&Value> {
    map.get(field.key())
        .ok_or_else(|| CustomerError::MissingFields(vec![field.key().to_string()]))
}

/// Read an integer field.
///
/// Numbers keep their literal text, so an integer literal that does not fit
/// `i64` is still an integer: below the range it is not positive, above it is
/// out of range. Only literals with a fraction or exponent are a type error.
pub fn integer_field(map: &Mapping, field: Field) -> CustomerResult<i64> {
    match present(map, field)? {
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                return Ok(value);
            }
            let literal = number.to_string();
            if literal.contains(['.', 'e', 'E']) {
                return Err(wrong_type(field, "an integer"));
            }
            let violation = if literal.starts_with('-') {
                Violation::NotPositive
            } else {
                Violation::OutOfRange
            };
            tracing::debug!(field = field.key(), %literal, %violation, "integer outside i64");
            Err(CustomerError::Range { field, violation })
        }
        _ => Err(wrong_type(field, "an integer")),
    }
}

/// Read a string field.
pub fn text_field(map: &Mapping, field: Field) -> CustomerResult<&str> {
    match present(map, field)? {
        Value::String(text) => Ok(text.as_str()),
        _ => Err(wrong_type(field, "a string")),
    }
}

/// Read a string field and run `rule` on it.
pub(crate) fn checked_text<'a>(
    map: &'a Mapping,
    field: Field,
    rule: fn(&str) -> CustomerResult<()>,
) -> CustomerResult<&'a str> {
    let text = text_field(map, field)?;
    rule(text)?;
    Ok(text)
}

fn describe_json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse JSON text that must hold a single object.
pub fn parse_object(text: &str) -> CustomerResult<Mapping> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, "failed to parse customer JSON");
        CustomerError::from(e)
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CustomerError::NotAnObject {
            found: describe_json_type(&other),
        }),
    }
}

/// Collect the top-level keys of `map` that no customer field uses.
pub fn unknown_keys(map: &Mapping) -> Vec<UnknownKey> {
    map.keys()
        .filter(|key| Field::parse(key).is_none())
        .map(|key| {
            tracing::trace!(%key, "ignoring unknown customer key");
            UnknownKey { key: key.clone() }
        })
        .collect()
}
