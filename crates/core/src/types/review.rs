//! Review documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ProductId, ReviewId};
use crate::document::{Document, null_as_default};
use crate::error::RecordError;

/// Lowest and highest star rating a review can carry.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A product review (`_type == "review"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Document ID, when the query projected it.
    #[serde(default, rename = "_id")]
    pub id: Option<ReviewId>,
    /// Reviewed product.
    pub product_id: ProductId,
    /// Author display name; may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    /// Review body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// When the review was submitted.
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl Review {
    fn id_or_placeholder(&self) -> &str {
        self.id
            .as_ref()
            .map_or(crate::document::UNKNOWN_ID, ReviewId::as_str)
    }
}

impl Document for Review {
    const KIND: &'static str = "review";
    const TYPE_NAME: &'static str = "review";
    const REQUIRED_FIELDS: &'static [&'static str] = &["productId", "createdAt", "rating"];
    const NUMERIC_FIELDS: &'static [&'static str] = &["rating"];

    fn validate(&self) -> Result<(), RecordError> {
        if !RATING_RANGE.contains(&self.rating) {
            return Err(RecordError::invalid(
                Self::KIND,
                self.id_or_placeholder(),
                "rating",
                format!("must be between 1 and 5, got {}", self.rating),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::document::decode;

    fn review_json() -> Value {
        json!({
            "_type": "review",
            "productId": "p-1",
            "userName": "Ada",
            "text": "Lovely jam",
            "createdAt": "2024-02-10",
            "rating": 5
        })
    }

    #[test]
    fn test_decode_review_without_id() {
        let review: Review = decode(review_json()).unwrap();
        assert!(review.id.is_none());
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn test_null_user_name_becomes_empty() {
        let mut value = review_json();
        value["userName"] = Value::Null;
        let review: Review = decode(value).unwrap();
        assert!(review.user_name.is_empty());
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut value = review_json();
        value["rating"] = json!(0);
        let err = decode::<Review>(value).unwrap_err();
        assert_eq!(err.field(), Some("rating"));
        assert!(err.to_string().starts_with("review <unknown>"));
    }

    #[test]
    fn test_fractional_rating_is_malformed() {
        let mut value = review_json();
        value["rating"] = json!(4.5);
        let err = decode::<Review>(value).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { .. }));
    }
}
