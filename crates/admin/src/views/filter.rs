//! Search and status filtering.

use storedash_core::OrderStatus;

use super::params::ViewParams;
use super::record::ViewRecord;

/// Keep the records that match the search term and status filter.
///
/// A record matches when its searchable text contains the search term
/// (case-insensitive; an empty term matches everything) and, if a status
/// filter is set, its status equals the filter. Records without a status
/// never match a concrete status filter. Relative order is preserved.
#[must_use]
pub fn filter<R: ViewRecord>(records: &[R], params: &ViewParams) -> Vec<R> {
    let needle = params.search.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &needle, params.status.as_ref()))
        .cloned()
        .collect()
}

/// Predicate behind [`filter`]. `needle` must already be lowercased.
#[must_use]
pub fn matches<R: ViewRecord>(record: &R, needle: &str, status: Option<&OrderStatus>) -> bool {
    let search_ok = needle.is_empty() || record.matches_search(needle);
    let status_ok = status.is_none_or(|wanted| record.status() == Some(wanted));
    search_ok && status_ok
}
