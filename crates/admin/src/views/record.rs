//! The view-side face of a record.

use chrono::{DateTime, Utc};
use storedash_core::{Document, Order, OrderStatus, Product, RecordError, Review, is_valid_amount};

/// What the aggregator needs to know about a record to filter and sort it.
pub trait ViewRecord: Document + Clone {
    /// Name of the field [`ViewRecord::amount`] reads, for error reporting.
    const AMOUNT_FIELD: &'static str;

    /// Identifier used in error messages.
    fn record_id(&self) -> &str;

    /// Whether any searchable text contains `needle`.
    ///
    /// `needle` is already lowercased.
    fn matches_search(&self, needle: &str) -> bool;

    /// The record's status, if the kind has one.
    fn status(&self) -> Option<&OrderStatus> {
        None
    }

    /// Creation time.
    fn created_at(&self) -> DateTime<Utc>;

    /// The numeric sort key.
    fn amount(&self) -> f64;

    /// The name-like sort key.
    fn lexical_key(&self) -> &str;

    /// The amount, validated for arithmetic and comparison.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidField`] for a non-finite or negative amount.
    fn checked_amount(&self) -> Result<f64, RecordError> {
        let amount = self.amount();
        if is_valid_amount(amount) {
            Ok(amount)
        } else {
            Err(RecordError::invalid(
                Self::KIND,
                self.record_id(),
                Self::AMOUNT_FIELD,
                format!("must be a finite, non-negative amount, got {amount}"),
            ))
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl ViewRecord for Order {
    const AMOUNT_FIELD: &'static str = "total";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.order_number, needle)
            || self.items.iter().any(|item| contains_ci(&item.name, needle))
    }

    fn status(&self) -> Option<&OrderStatus> {
        self.status.as_ref()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn amount(&self) -> f64 {
        self.total
    }

    fn lexical_key(&self) -> &str {
        &self.order_number
    }
}

impl ViewRecord for Product {
    const AMOUNT_FIELD: &'static str = "price";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || self
                .category_title()
                .is_some_and(|title| contains_ci(title, needle))
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn amount(&self) -> f64 {
        self.price
    }

    fn lexical_key(&self) -> &str {
        &self.name
    }
}

impl ViewRecord for Review {
    const AMOUNT_FIELD: &'static str = "rating";

    fn record_id(&self) -> &str {
        self.id
            .as_ref()
            .map_or(storedash_core::document::UNKNOWN_ID, |id| id.as_str())
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.user_name, needle) || contains_ci(&self.text, needle)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn amount(&self) -> f64 {
        f64::from(self.rating)
    }

    fn lexical_key(&self) -> &str {
        &self.user_name
    }
}
