//! Orders API handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::error::AppError;
use crate::services::{OrdersView, orders};
use crate::state::AppState;
use crate::views::{ViewParams, ViewQuery};

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list))
        .route("/api/orders/{id}", delete(remove))
}

/// Order table with status summary.
///
/// # Errors
///
/// Returns an error for an invalid query or a failed fetch.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<OrdersView>, AppError> {
    let params = ViewParams::try_from(query)?;
    Ok(Json(orders::load(state.store(), &params).await?))
}

/// Delete an order.
///
/// # Errors
///
/// Returns 404 if no order has this id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    orders::delete(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
