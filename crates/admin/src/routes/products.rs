//! Products API handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::error::AppError;
use crate::services::{ProductForm, ProductRow, ProductsView, products};
use crate::state::AppState;
use crate::views::{ViewParams, ViewQuery};

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/{id}", delete(remove))
}

/// Product list.
///
/// # Errors
///
/// Returns an error for an invalid query or a failed fetch.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<ProductsView>, AppError> {
    let params = ViewParams::try_from(query)?;
    Ok(Json(products::load(state.store(), &params).await?))
}

/// Create a product from the add-product form.
///
/// # Errors
///
/// Returns 400 for an invalid form.
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<ProductRow>), AppError> {
    let created = products::create(state.store(), &form).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a product.
///
/// # Errors
///
/// Returns 404 if no product has this id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    products::delete(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
