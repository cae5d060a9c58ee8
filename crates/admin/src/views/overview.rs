//! The analytics overview: headline figures plus chart series.

use serde::Serialize;
use storedash_core::{Order, Product, RecordError, Review};

use super::metrics::{OrderSummary, PeriodBucket, aggregate_by_period, summarize};
use super::params::Granularity;
use super::record::ViewRecord;

/// Everything the analytics screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub total_products: usize,
    /// Units in stock across all products.
    pub total_inventory: u64,
    /// Sum of price times stock level across all products.
    pub inventory_value: f64,
    pub orders: OrderSummary,
    pub total_reviews: usize,
    pub sales_trend: Vec<PeriodBucket>,
    pub revenue: Vec<RevenuePoint>,
    pub inventory: Vec<InventoryPoint>,
    pub status_distribution: Vec<StatusSlice>,
    pub product_performance: Vec<ProductPerformance>,
    pub inventory_vs_sales: Vec<InventorySalesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub period: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryPoint {
    pub name: String,
    pub stock_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub name: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPerformance {
    pub name: String,
    pub stock_level: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySalesPoint {
    pub stock_level: u32,
    /// Price times stock level.
    pub sales: f64,
}

/// Build the analytics overview from one fetch of each record kind.
///
/// # Errors
///
/// Returns a [`RecordError`] for the first product price or order total that
/// is not a finite, non-negative amount.
pub fn dashboard_overview(
    products: &[Product],
    orders: &[Order],
    reviews: &[Review],
    granularity: Granularity,
) -> Result<DashboardOverview, RecordError> {
    for product in products {
        product.checked_amount()?;
    }

    let summary = summarize(orders);
    let sales_trend = aggregate_by_period(orders, granularity)?;

    let revenue = sales_trend
        .iter()
        .map(|bucket| RevenuePoint {
            period: bucket.period.clone(),
            revenue: bucket.sales_sum,
        })
        .collect();

    // "Delivered" is the shipped count.
    let status_distribution = vec![
        StatusSlice {
            name: "Completed",
            value: summary.completed,
        },
        StatusSlice {
            name: "Pending",
            value: summary.pending,
        },
        StatusSlice {
            name: "Delivered",
            value: summary.shipped,
        },
    ];

    Ok(DashboardOverview {
        total_products: products.len(),
        total_inventory: products.iter().map(|p| u64::from(p.stock_level)).sum(),
        inventory_value: products.iter().map(Product::stock_value).sum(),
        orders: summary,
        total_reviews: reviews.len(),
        sales_trend,
        revenue,
        inventory: products
            .iter()
            .map(|p| InventoryPoint {
                name: p.name.clone(),
                stock_level: p.stock_level,
            })
            .collect(),
        status_distribution,
        product_performance: products
            .iter()
            .map(|p| ProductPerformance {
                name: p.name.clone(),
                stock_level: p.stock_level,
                price: p.price,
            })
            .collect(),
        inventory_vs_sales: products
            .iter()
            .map(|p| InventorySalesPoint {
                stock_level: p.stock_level,
                sales: p.stock_value(),
            })
            .collect(),
    })
}
