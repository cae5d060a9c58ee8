//! Reviews API handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::error::AppError;
use crate::services::{ReviewsView, reviews};
use crate::state::AppState;
use crate::views::{ViewParams, ViewQuery};

/// Build the reviews router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/reviews", get(list))
}

/// Review cards with rating summary.
///
/// # Errors
///
/// Returns an error for an invalid query or a failed fetch.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<ReviewsView>, AppError> {
    let params = ViewParams::try_from(query)?;
    Ok(Json(reviews::load(state.store(), &params).await?))
}
