//! Analytics screen.

use tracing::instrument;

use super::fetch_failed;
use crate::error::AppError;
use crate::store::ContentStore;
use crate::views::{self, DashboardOverview, Granularity};

/// Load the analytics overview.
///
/// # Errors
///
/// Returns `AppError` if a fetch fails or a price or total is malformed.
#[instrument(skip(store))]
pub async fn load(
    store: &dyn ContentStore,
    granularity: Granularity,
) -> Result<DashboardOverview, AppError> {
    let products = store
        .fetch_products()
        .await
        .map_err(fetch_failed("products"))?;
    let orders = store.fetch_orders().await.map_err(fetch_failed("orders"))?;
    let reviews = store.fetch_reviews().await.map_err(fetch_failed("reviews"))?;

    Ok(views::dashboard_overview(
        &products,
        &orders,
        &reviews,
        granularity,
    )?)
}
