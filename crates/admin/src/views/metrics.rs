//! Order metrics: status counts, per-order line metrics and time buckets.

use indexmap::IndexMap;
use serde::Serialize;
use storedash_core::{Order, OrderStatus, RecordError};

use super::params::Granularity;
use super::record::ViewRecord;

/// Order counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderSummary {
    /// All orders, whatever their status.
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub shipped: usize,
    pub cancelled: usize,
}

/// Count orders by exact status.
///
/// Orders with no status or an unrecognized one count toward `total` only.
#[must_use]
pub fn summarize(orders: &[Order]) -> OrderSummary {
    orders
        .iter()
        .fold(OrderSummary::default(), |mut summary, order| {
            summary.total += 1;
            match order.status {
                Some(OrderStatus::Completed) => summary.completed += 1,
                Some(OrderStatus::Pending) => summary.pending += 1,
                Some(OrderStatus::Shipped) => summary.shipped += 1,
                Some(OrderStatus::Cancelled) => summary.cancelled += 1,
                Some(OrderStatus::Other(_)) | None => {}
            }
            summary
        })
}

/// Per-order line metrics, derived from the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineMetrics {
    /// Number of line items.
    pub item_count: usize,
    /// Sum of all line item quantities.
    pub total_quantity: u64,
}

/// Derive item count and total quantity from an order's items.
///
/// Always recomputed; nothing is cached on the order.
#[must_use]
pub fn derive_order_line_metrics(order: &Order) -> LineMetrics {
    LineMetrics {
        item_count: order.items.len(),
        total_quantity: order.items.iter().map(|item| u64::from(item.quantity)).sum(),
    }
}

/// Orders and sales for one calendar period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    /// Period label, e.g. "Jan 2024".
    pub period: String,
    /// Number of orders created in the period.
    pub order_count: u64,
    /// Sum of order totals in the period.
    ///
    /// Accumulated in input order, so the last bits depend on that order.
    pub sales_sum: f64,
}

/// Bucket orders by the calendar period of their creation time (UTC).
///
/// Buckets come out in the order their period is first seen in `orders`,
/// not chronologically. Periods without orders do not appear.
///
/// # Errors
///
/// Returns a [`RecordError`] for the first order whose total is not a finite,
/// non-negative amount.
pub fn aggregate_by_period(
    orders: &[Order],
    granularity: Granularity,
) -> Result<Vec<PeriodBucket>, RecordError> {
    let mut buckets: IndexMap<String, PeriodBucket> = IndexMap::new();

    for order in orders {
        let total = order.checked_amount()?;
        let period = order
            .created_at
            .format(granularity.label_format())
            .to_string();

        let bucket = buckets
            .entry(period)
            .or_insert_with_key(|period| PeriodBucket {
                period: period.clone(),
                order_count: 0,
                sales_sum: 0.0,
            });
        bucket.order_count += 1;
        bucket.sales_sum += total;
    }

    Ok(buckets.into_values().collect())
}
