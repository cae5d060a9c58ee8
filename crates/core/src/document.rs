//! Decoding content-store documents into typed records.
//!
//! The content store returns loosely typed JSON. Before handing a document to
//! serde, its required fields are checked for presence and its numeric fields
//! for actually being numbers, so the resulting [`RecordError`] can name the
//! offending field. Semantic checks (finite amounts, rating range, ...) run
//! afterwards through [`Document::validate`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::RecordError;

/// Placeholder id used in errors for documents without a readable `_id`.
pub const UNKNOWN_ID: &str = "<unknown>";

/// A record kind stored as a content-store document.
pub trait Document: DeserializeOwned {
    /// Human-readable record kind used in errors and logs.
    const KIND: &'static str;
    /// Value of the `_type` attribute in the content store.
    const TYPE_NAME: &'static str;
    /// Fields that must be present and non-null.
    const REQUIRED_FIELDS: &'static [&'static str];
    /// Fields that, when present, must be JSON numbers.
    const NUMERIC_FIELDS: &'static [&'static str];

    /// Check the raw document shape before deserialization.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field or non-numeric numeric field.
    fn check_shape(value: &Value, id: &str) -> Result<(), RecordError> {
        check_fields(value, Self::KIND, id, "", Self::REQUIRED_FIELDS, Self::NUMERIC_FIELDS)
    }

    /// Semantic validation of a deserialized record.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field that violates a constraint.
    fn validate(&self) -> Result<(), RecordError>;
}

/// Decode and validate a single document.
///
/// # Errors
///
/// Returns a [`RecordError`] identifying the record and offending field.
pub fn decode<D: Document>(value: Value) -> Result<D, RecordError> {
    let id = document_id(&value).to_string();

    if !value.is_object() {
        return Err(RecordError::Malformed {
            kind: D::KIND,
            id,
            message: "document is not a JSON object".to_string(),
        });
    }

    D::check_shape(&value, &id)?;

    let record: D = serde_json::from_value(value).map_err(|e| RecordError::Malformed {
        kind: D::KIND,
        id: id.clone(),
        message: e.to_string(),
    })?;

    record.validate()?;
    Ok(record)
}

/// Read the `_id` of a raw document, if it has one.
#[must_use]
pub fn document_id(value: &Value) -> &str {
    value
        .get("_id")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ID)
}

/// Check required and numeric fields on a JSON object.
///
/// `prefix` is prepended to field names in errors (e.g. `items[2].`).
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_fields(
    value: &Value,
    kind: &'static str,
    id: &str,
    prefix: &str,
    required: &'static [&'static str],
    numeric: &'static [&'static str],
) -> Result<(), RecordError> {
    for &field in required {
        if value.get(field).is_none_or(Value::is_null) {
            return Err(if prefix.is_empty() {
                RecordError::MissingField {
                    kind,
                    id: id.to_string(),
                    field,
                }
            } else {
                RecordError::invalid(kind, id, format!("{prefix}{field}"), "missing")
            });
        }
    }

    for &field in numeric {
        match value.get(field) {
            None | Some(Value::Null | Value::Number(_)) => {}
            Some(other) => {
                return Err(RecordError::invalid(
                    kind,
                    id,
                    format!("{prefix}{field}"),
                    format!("expected a number, found {}", json_type_name(other)),
                ));
            }
        }
    }

    Ok(())
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Deserialize `null` as the type's default value.
///
/// # Errors
///
/// Propagates errors for values that are neither `null` nor a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
