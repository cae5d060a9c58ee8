//! Orders screen.

use serde::Serialize;
use storedash_core::{Order, format_usd};
use tracing::instrument;

use super::fetch_failed;
use crate::error::AppError;
use crate::store::ContentStore;
use crate::views::{self, OrderSummary, ViewParams};

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created_at: String,
    /// Upper-cased status, or "Unknown".
    pub status: String,
    pub item_count: usize,
    pub total_quantity: u64,
    /// Total with currency symbol, two decimals.
    pub total: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        let metrics = views::derive_order_line_metrics(order);
        Self {
            id: order.id.to_string(),
            order_number: order.order_number.clone(),
            created_at: order.created_at.format("%Y-%m-%d").to_string(),
            status: order
                .status
                .as_ref()
                .map_or_else(|| "Unknown".to_string(), |s| s.as_str().to_uppercase()),
            item_count: metrics.item_count,
            total_quantity: metrics.total_quantity,
            total: format_usd(order.total),
        }
    }
}

/// The orders screen: filtered, sorted rows plus status counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersView {
    pub rows: Vec<OrderRow>,
    /// Counts over all fetched orders, not just the visible rows.
    pub summary: OrderSummary,
}

/// Load the orders screen.
///
/// # Errors
///
/// Returns `AppError` if the fetch fails or an order total is malformed.
#[instrument(skip(store))]
pub async fn load(store: &dyn ContentStore, params: &ViewParams) -> Result<OrdersView, AppError> {
    let orders = store.fetch_orders().await.map_err(fetch_failed("orders"))?;

    let summary = views::summarize(&orders);
    let visible = views::sort(&views::filter(&orders, params), &params.sort)?;

    Ok(OrdersView {
        rows: visible.iter().map(OrderRow::from).collect(),
        summary,
    })
}

/// Delete an order.
///
/// # Errors
///
/// Returns `AppError` if no order has this id or the store fails.
#[instrument(skip(store))]
pub async fn delete(store: &dyn ContentStore, id: &str) -> Result<(), AppError> {
    store.delete_order(id).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storedash_core::{LineItem, OrderId, OrderStatus};

    use super::*;
    use crate::store::SnapshotStore;
    use crate::views::SortKey;

    fn order(number: &str, day: u32, total: f64, status: Option<OrderStatus>) -> Order {
        Order {
            id: OrderId::new(format!("o-{number}")),
            order_number: number.to_string(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
                .and_utc(),
            total,
            items: vec![LineItem {
                product_id: None,
                name: "Mango Jam".to_string(),
                quantity: 3,
                price: total / 3.0,
            }],
            status,
        }
    }

    fn store() -> SnapshotStore {
        SnapshotStore::from_records(
            vec![
                order("ORD-2", 2, 20.0, Some(OrderStatus::Shipped)),
                order("ORD-1", 1, 9.5, Some(OrderStatus::Pending)),
                order("ORD-3", 3, 5.0, None),
            ],
            vec![],
            vec![],
        )
    }

    #[tokio::test]
    async fn test_load_sorts_by_time_by_default() {
        let view = load(&store(), &ViewParams::default()).await.unwrap();
        let numbers: Vec<&str> = view.rows.iter().map(|r| r.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["ORD-1", "ORD-2", "ORD-3"]);
    }

    #[tokio::test]
    async fn test_row_formatting() {
        let view = load(&store(), &ViewParams::default()).await.unwrap();
        let row = &view.rows[0];
        assert_eq!(row.created_at, "2024-01-01");
        assert_eq!(row.status, "PENDING");
        assert_eq!(row.item_count, 1);
        assert_eq!(row.total_quantity, 3);
        assert_eq!(row.total, "$9.50");
        assert_eq!(view.rows[2].status, "Unknown");
    }

    #[tokio::test]
    async fn test_summary_ignores_filters() {
        let params = ViewParams::default().with_status(OrderStatus::Shipped);
        let view = load(&store(), &params).await.unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.summary.total, 3);
        assert_eq!(view.summary.pending, 1);
    }

    #[tokio::test]
    async fn test_sort_by_total() {
        let params = ViewParams::default().with_sort(SortKey::Amount);
        let view = load(&store(), &params).await.unwrap();
        assert_eq!(view.rows[0].order_number, "ORD-3");
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let store = store();
        delete(&store, "o-ORD-2").await.unwrap();
        let view = load(&store, &ViewParams::default()).await.unwrap();
        assert_eq!(view.summary.total, 2);
        assert!(view.rows.iter().all(|r| r.id != "o-ORD-2"));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let err = delete(&store(), "missing").await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
