//! Errors for malformed records.

use thiserror::Error;

/// A record that violates the shape or value constraints the views rely on.
///
/// Every variant names the record kind and the offending field so a caller
/// can point at the exact document that needs fixing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field is absent or `null`.
    #[error("{kind} {id}: missing field `{field}`")]
    MissingField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },

    /// A field is present but has the wrong type or an out-of-range value.
    #[error("{kind} {id}: invalid field `{field}`: {reason}")]
    InvalidField {
        kind: &'static str,
        id: String,
        field: String,
        reason: String,
    },

    /// The document could not be deserialized for another reason.
    #[error("{kind} {id}: {message}")]
    Malformed {
        kind: &'static str,
        id: String,
        message: String,
    },
}

impl RecordError {
    /// Build an `InvalidField` error.
    #[must_use]
    pub fn invalid(
        kind: &'static str,
        id: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            kind,
            id: id.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The name of the offending field, if the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::InvalidField { field, .. } => Some(field.as_str()),
            Self::Malformed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        let err = RecordError::MissingField {
            kind: "order",
            id: "o-1".to_string(),
            field: "createdAt",
        };
        assert_eq!(err.to_string(), "order o-1: missing field `createdAt`");
        assert_eq!(err.field(), Some("createdAt"));

        let err = RecordError::invalid("product", "p-1", "price", "must be a number");
        assert_eq!(
            err.to_string(),
            "product p-1: invalid field `price`: must be a number"
        );
    }
}
