//! List views: orders, products and reviews.

use std::io::Write;
use std::path::Path;

use storedash_admin::services::{orders as order_screen, products as product_screen, reviews as review_screen};
use storedash_admin::views::ViewParams;

use super::{CommandError, open, write_json};

/// Write the orders table.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded or a total is malformed.
pub async fn orders<W: Write>(
    export: &Path,
    params: ViewParams,
    out: &mut W,
) -> Result<(), CommandError> {
    let store = open(export).await?;
    write_json(out, &order_screen::load(&store, &params).await?)
}

/// Write the product list.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded or a price is malformed.
pub async fn products<W: Write>(
    export: &Path,
    params: ViewParams,
    out: &mut W,
) -> Result<(), CommandError> {
    let store = open(export).await?;
    write_json(out, &product_screen::load(&store, &params).await?)
}

/// Write the review cards.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded.
pub async fn reviews<W: Write>(
    export: &Path,
    params: ViewParams,
    out: &mut W,
) -> Result<(), CommandError> {
    let store = open(export).await?;
    write_json(out, &review_screen::load(&store, &params).await?)
}
