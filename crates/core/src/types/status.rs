//! Order status as stored on content-store order documents.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The content store keeps the status as a free string. The four values the
/// back office knows about get their own variant; anything else is kept
/// verbatim in [`OrderStatus::Other`] so it still compares equal to an
/// identical filter value and never falls into one of the named buckets.
/// A missing or `null` status is modelled as `Option<OrderStatus>::None` on
/// the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Completed,
    Shipped,
    Cancelled,
    /// A status string the back office does not recognize.
    Other(String),
}

impl OrderStatus {
    /// The raw status string as stored in the content store.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Shipped => "shipped",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Get a display-friendly label for the status.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Shipped => "Shipped",
            Self::Cancelled => "Cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the statuses the back office knows about.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "shipped" => Self::Shipped,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
