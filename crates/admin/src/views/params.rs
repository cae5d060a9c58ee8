//! View parameters: search, status filter, sort key and grouping.

use serde::Deserialize;
use storedash_core::OrderStatus;
use thiserror::Error;

/// Sort order for a record list.
///
/// Unknown sort values are kept as [`SortKey::Unrecognized`] and leave the
/// list in its input order rather than falling back to some other key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by creation time.
    #[default]
    CreatedAt,
    /// Ascending by the record's amount (order total, product price, rating).
    Amount,
    /// Ascending case-insensitive by the record's name-like key.
    Lexical,
    /// A sort value nobody asked us to support; identity order.
    Unrecognized(String),
}

impl SortKey {
    /// Parse a sort query parameter. Empty means the default (creation time).
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "" | "createdAt" | "created_at" | "time" => Self::CreatedAt,
            "total" | "amount" | "price" | "rating" => Self::Amount,
            "orderNumber" | "order_number" | "name" | "lexical" => Self::Lexical,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Calendar period used to bucket time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    Day,
    #[default]
    Month,
    Year,
}

impl Granularity {
    /// Parse a granularity query parameter. Empty means the default (month).
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnknownGranularity`] for anything else.
    pub fn from_param(raw: &str) -> Result<Self, ParamError> {
        match raw.trim() {
            "" | "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            "year" => Ok(Self::Year),
            other => Err(ParamError::UnknownGranularity(other.to_string())),
        }
    }

    /// `chrono` format string for bucket labels ("Jan 2024", "2024-01-05", "2024").
    #[must_use]
    pub const fn label_format(self) -> &'static str {
        match self {
            Self::Day => "%Y-%m-%d",
            Self::Month => "%b %Y",
            Self::Year => "%Y",
        }
    }
}

/// Errors parsing view parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown granularity: {0}")]
    UnknownGranularity(String),
}

/// The user-controlled settings of one screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewParams {
    /// Case-insensitive substring search; empty matches everything.
    pub search: String,
    /// Status filter; `None` means no filter.
    pub status: Option<OrderStatus>,
    /// Sort order.
    pub sort: SortKey,
    /// Time-series bucket size.
    pub granularity: Granularity,
}

impl ViewParams {
    /// Parameters with only a search term set.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    /// Set the status filter.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Query parameters for list screens, as received from HTTP or the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    /// Free-text search.
    pub search: Option<String>,
    /// Order status filter; empty means no filter.
    pub status: Option<String>,
    /// Sort key.
    pub sort: Option<String>,
    /// Time-series granularity.
    pub granularity: Option<String>,
}

impl TryFrom<ViewQuery> for ViewParams {
    type Error = ParamError;

    fn try_from(query: ViewQuery) -> Result<Self, Self::Error> {
        let status = query
            .status
            .filter(|s| !s.trim().is_empty())
            .map(OrderStatus::from);

        Ok(Self {
            search: query.search.unwrap_or_default(),
            status,
            sort: SortKey::from_param(query.sort.as_deref().unwrap_or_default()),
            granularity: Granularity::from_param(query.granularity.as_deref().unwrap_or_default())?,
        })
    }
}
