//! Review summaries and avatar seeds.

use serde::Serialize;
use storedash_core::{RATING_RANGE, Review};

/// Rating statistics for a list of reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub total: usize,
    /// Mean rating, `None` when no review carries a valid rating.
    pub average_rating: Option<f64>,
    /// Review counts for ratings 1 through 5.
    pub distribution: [usize; 5],
}

/// Count reviews and their ratings.
///
/// Ratings outside 1..=5 count toward `total` but not the average or the
/// distribution.
#[must_use]
#[allow(clippy::cast_precision_loss)] // review counts never approach 2^52
pub fn summarize_reviews(reviews: &[Review]) -> ReviewSummary {
    let mut distribution = [0_usize; 5];
    let mut rated = 0_usize;
    let mut rating_sum = 0_u64;

    for review in reviews.iter().filter(|r| RATING_RANGE.contains(&r.rating)) {
        if let Some(slot) = distribution.get_mut(usize::from(review.rating - 1)) {
            *slot += 1;
        }
        rated += 1;
        rating_sum += u64::from(review.rating);
    }

    ReviewSummary {
        total: reviews.len(),
        average_rating: (rated > 0).then(|| rating_sum as f64 / rated as f64),
        distribution,
    }
}

/// Deterministic avatar seed for a reviewer.
///
/// A rolling hash over the UTF-16 code units of the name, rendered in
/// decimal: `h = unit + ((h as i32) << 5) - h`. Only the shifted term is
/// truncated to 32 bits, so the running value itself can leave the `i32`
/// range. An empty name yields `"default"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // truncation to 32 bits is the hash
pub fn avatar_seed(user_name: &str) -> String {
    if user_name.is_empty() {
        return "default".to_string();
    }

    user_name
        .encode_utf16()
        .fold(0_i64, |hash, unit| {
            let shifted = i64::from((hash as i32).wrapping_shl(5));
            i64::from(unit) + shifted - hash
        })
        .to_string()
}
