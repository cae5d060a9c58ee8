//! Stable sorting by the view's sort key.

use std::cmp::Ordering;

use feruca::Collator;
use storedash_core::RecordError;

use super::params::SortKey;
use super::record::ViewRecord;

/// Return a sorted copy of `records`.
///
/// All orders are ascending and stable: records with equal keys keep their
/// input order. [`SortKey::Lexical`] collates with the Unicode Collation
/// Algorithm over the CLDR root order, so accents and case are secondary to
/// the base letters. [`SortKey::Unrecognized`] returns the input order
/// unchanged.
///
/// # Errors
///
/// Sorting by [`SortKey::Amount`] validates every amount first and returns
/// the first non-finite or negative one as a [`RecordError`].
pub fn sort<R: ViewRecord>(records: &[R], key: &SortKey) -> Result<Vec<R>, RecordError> {
    let mut sorted = records.to_vec();

    match key {
        SortKey::CreatedAt => sorted.sort_by_key(ViewRecord::created_at),
        SortKey::Amount => {
            for record in records {
                record.checked_amount()?;
            }
            sorted.sort_by(|a, b| {
                a.amount()
                    .partial_cmp(&b.amount())
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Lexical => {
            let mut collator = Collator::default();
            sorted.sort_by(|a, b| collator.collate(a.lexical_key(), b.lexical_key()));
        }
        SortKey::Unrecognized(raw) => {
            tracing::debug!(sort = %raw, kind = R::KIND, "Unrecognized sort key, keeping input order");
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::views::fixtures::{order, product};

    fn numbers(orders: &[storedash_core::Order]) -> Vec<&str> {
        orders.iter().map(|o| o.order_number.as_str()).collect()
    }

    #[test]
    fn test_sort_by_time_ascending() {
        let orders = vec![
            order("C", "2024-03-01", 1.0, None),
            order("A", "2024-01-01", 1.0, None),
            order("B", "2024-02-01", 1.0, None),
        ];
        let sorted = sort(&orders, &SortKey::CreatedAt).unwrap();
        assert_eq!(numbers(&sorted), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sort_by_time_is_stable() {
        let orders = vec![
            order("second", "2024-01-01", 1.0, None),
            order("first", "2023-12-01", 1.0, None),
            order("third", "2024-01-01", 1.0, None),
        ];
        let sorted = sort(&orders, &SortKey::CreatedAt).unwrap();
        assert_eq!(numbers(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_by_amount() {
        let orders = vec![
            order("big", "2024-01-01", 99.0, None),
            order("small", "2024-01-01", 1.5, None),
            order("tie-a", "2024-01-01", 10.0, None),
            order("tie-b", "2024-01-01", 10.0, None),
        ];
        let sorted = sort(&orders, &SortKey::Amount).unwrap();
        assert_eq!(numbers(&sorted), vec!["small", "tie-a", "tie-b", "big"]);
    }

    #[test]
    fn test_sort_by_amount_rejects_nan() {
        let orders = vec![
            order("ok", "2024-01-01", 1.0, None),
            order("broken", "2024-01-01", f64::NAN, None),
        ];
        let err = sort(&orders, &SortKey::Amount).unwrap_err();
        assert_eq!(err.field(), Some("total"));
        assert!(err.to_string().contains("id-broken"));
    }

    #[test]
    fn test_sort_lexical_collates_accents() {
        let orders = vec![
            order("zed", "2024-01-01", 1.0, None),
            order("émile", "2024-01-01", 1.0, None),
            order("Eve", "2024-01-01", 1.0, None),
        ];
        let sorted = sort(&orders, &SortKey::Lexical).unwrap();
        assert_eq!(numbers(&sorted), vec!["émile", "Eve", "zed"]);
    }

    #[test]
    fn test_sort_lexical_case_is_a_tiebreak() {
        let orders = vec![
            order("B", "2024-01-01", 1.0, None),
            order("A", "2024-01-01", 1.0, None),
            order("a", "2024-01-01", 1.0, None),
        ];
        let sorted = sort(&orders, &SortKey::Lexical).unwrap();
        assert_eq!(numbers(&sorted), vec!["a", "A", "B"]);
    }

    #[test]
    fn test_sort_lexical_ignores_case() {
        let orders = vec![
            order("ord-2", "2024-01-01", 1.0, None),
            order("ORD-10", "2024-01-01", 1.0, None),
            order("Ord-1", "2024-01-01", 1.0, None),
        ];
        let sorted = sort(&orders, &SortKey::Lexical).unwrap();
        assert_eq!(numbers(&sorted), vec!["Ord-1", "ORD-10", "ord-2"]);
    }

    #[test]
    fn test_unrecognized_key_is_identity() {
        let orders = vec![
            order("B", "2024-02-01", 2.0, None),
            order("A", "2024-01-01", 1.0, None),
        ];
        let sorted = sort(&orders, &SortKey::Unrecognized("popularity".to_string())).unwrap();
        assert_eq!(sorted, orders);
    }

    #[test]
    fn test_equal_keys_keep_input_order_for_every_permutation() {
        let a = order("a", "2024-01-01", 5.0, None);
        let b = order("b", "2024-01-01", 5.0, None);
        let c = order("c", "2023-01-01", 1.0, None);

        for input in [
            vec![a.clone(), b.clone(), c.clone()],
            vec![b.clone(), c.clone(), a.clone()],
            vec![c.clone(), a.clone(), b.clone()],
        ] {
            let sorted = sort(&input, &SortKey::Amount).unwrap();
            let ties: Vec<&str> = input
                .iter()
                .filter(|o| o.total.to_bits() == 5.0_f64.to_bits())
                .map(|o| o.order_number.as_str())
                .collect();
            assert_eq!(sorted[0].order_number, "c");
            assert_eq!(numbers(&sorted[1..]), ties);
        }
    }

    #[test]
    fn test_sort_products_by_price() {
        let products = vec![product("Jam", 7.5, 1), product("Soda", 2.0, 1)];
        let sorted = sort(&products, &SortKey::Amount).unwrap();
        assert_eq!(sorted[0].name, "Soda");
    }
}
