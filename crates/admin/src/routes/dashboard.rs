//! Analytics overview handler.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::dashboard;
use crate::state::AppState;
use crate::views::{DashboardOverview, Granularity};

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(overview))
}

#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    pub granularity: Option<String>,
}

/// Headline figures and chart series.
///
/// # Errors
///
/// Returns 400 for an unknown granularity.
pub async fn overview(
    State(state): State<AppState>,
    Query(query): Query<OverviewQuery>,
) -> Result<Json<DashboardOverview>, AppError> {
    let granularity = Granularity::from_param(query.granularity.as_deref().unwrap_or_default())?;
    Ok(Json(dashboard::load(state.store(), granularity).await?))
}
