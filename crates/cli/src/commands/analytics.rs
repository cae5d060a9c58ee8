//! Analytics: sales trend, status summary and the full overview.

use std::io::Write;
use std::path::Path;

use storedash_admin::services::dashboard;
use storedash_admin::store::ContentStore;
use storedash_admin::views::{self, Granularity};

use super::{CommandError, open, write_json};

/// Write orders and sales per period, in first-seen order.
///
/// # Errors
///
/// Returns an error for an unknown granularity, an unreadable export, or a
/// malformed order total.
pub async fn trend<W: Write>(
    export: &Path,
    granularity: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let granularity = Granularity::from_param(granularity)?;
    let store = open(export).await?;
    let orders = store.fetch_orders().await?;
    write_json(out, &views::aggregate_by_period(&orders, granularity)?)
}

/// Write order counts by status.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded.
pub async fn summary<W: Write>(export: &Path, out: &mut W) -> Result<(), CommandError> {
    let store = open(export).await?;
    let orders = store.fetch_orders().await?;
    write_json(out, &views::summarize(&orders))
}

/// Write the analytics overview.
///
/// # Errors
///
/// Returns an error for an unknown granularity, an unreadable export, or a
/// malformed amount.
pub async fn overview<W: Write>(
    export: &Path,
    granularity: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let granularity = Granularity::from_param(granularity)?;
    let store = open(export).await?;
    write_json(out, &dashboard::load(&store, granularity).await?)
}
