//! HTTP route handlers for the dashboard JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Health check
//!
//! # Auth
//! POST   /api/login              - Check administrator credentials
//!
//! # Orders
//! GET    /api/orders             - Order table (?search&status&sort)
//! DELETE /api/orders/{id}        - Delete an order
//!
//! # Products
//! GET    /api/products           - Product list (?search&sort)
//! POST   /api/products           - Create a product from the add-product form
//! DELETE /api/products/{id}      - Delete a product
//!
//! # Reviews
//! GET    /api/reviews            - Review cards (?search&sort)
//!
//! # Analytics
//! GET    /api/dashboard          - Overview (?granularity=day|month|year)
//! ```

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod reviews;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the complete router, without state or middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::router())
        .merge(orders::router())
        .merge(products::router())
        .merge(reviews::router())
        .merge(dashboard::router())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
