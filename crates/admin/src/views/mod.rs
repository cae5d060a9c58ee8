//! View aggregation: filtering, sorting and summarizing records for a screen.
//!
//! Every function here is pure. Inputs are borrowed and never mutated; each
//! call derives a fresh result from the records it is given.

mod filter;
mod metrics;
mod overview;
mod params;
mod record;
mod reviews;
mod sort;

#[cfg(test)]
mod fixtures;

pub use filter::{filter, matches};
pub use metrics::{
    LineMetrics, OrderSummary, PeriodBucket, aggregate_by_period, derive_order_line_metrics,
    summarize,
};
pub use overview::{
    DashboardOverview, InventoryPoint, InventorySalesPoint, ProductPerformance, RevenuePoint,
    StatusSlice, dashboard_overview,
};
pub use params::{Granularity, ParamError, SortKey, ViewParams, ViewQuery};
pub use record::ViewRecord;
pub use reviews::{ReviewSummary, avatar_seed, summarize_reviews};
pub use sort::sort;
