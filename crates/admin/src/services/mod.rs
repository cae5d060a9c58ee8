//! Screen services for the dashboard.
//!
//! Each `load` call is one screen activation: fetch from the content store
//! once, then derive the screen's view. Nothing is retained between calls.
//!
//! # Services
//!
//! - `auth` - Administrator credential check
//! - `dashboard` - Analytics overview
//! - `orders` - Order table with status summary, order deletion
//! - `products` - Product list, add-product form, product deletion
//! - `reviews` - Review cards with rating summary

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod reviews;

pub use auth::{LoginOutcome, check_credentials};
pub use orders::{OrderRow, OrdersView};
pub use products::{FormError, ProductForm, ProductRow, ProductsView};
pub use reviews::{ReviewCard, ReviewsView};

use crate::error::AppError;
use crate::store::StoreError;

/// Log a failed content store fetch and convert it for the caller.
fn fetch_failed(what: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |e| {
        tracing::error!(error = %e, "Failed to fetch {what}");
        AppError::from(e)
    }
}
