//! Reviews screen.

use serde::Serialize;
use storedash_core::Review;
use tracing::instrument;

use super::fetch_failed;
use crate::error::AppError;
use crate::store::ContentStore;
use crate::views::{self, ReviewSummary, ViewParams};

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150";

/// One review card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewCard {
    pub product_id: String,
    pub user_name: String,
    pub avatar_url: String,
    pub rating: u8,
    pub text: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created_at: String,
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        Self {
            product_id: review.product_id.to_string(),
            user_name: review.user_name.clone(),
            avatar_url: format!("{AVATAR_BASE_URL}?u={}", views::avatar_seed(&review.user_name)),
            rating: review.rating,
            text: review.text.clone(),
            created_at: review.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewsView {
    pub cards: Vec<ReviewCard>,
    /// Rating statistics over all fetched reviews.
    pub summary: ReviewSummary,
}

/// Load the reviews screen.
///
/// # Errors
///
/// Returns `AppError` if the fetch fails.
#[instrument(skip(store))]
pub async fn load(store: &dyn ContentStore, params: &ViewParams) -> Result<ReviewsView, AppError> {
    let reviews = store.fetch_reviews().await.map_err(fetch_failed("reviews"))?;

    let summary = views::summarize_reviews(&reviews);
    let visible = views::sort(&views::filter(&reviews, params), &params.sort)?;

    Ok(ReviewsView {
        cards: visible.iter().map(ReviewCard::from).collect(),
        summary,
    })
}
