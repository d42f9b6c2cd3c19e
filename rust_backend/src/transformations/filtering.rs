use chrono::NaiveDate;

use crate::core::domain::{DateRange, Dated};

/// Keep the records whose date lies in the closed interval `[lo, hi]`.
///
/// Input order is preserved. An inverted interval (`lo > hi`) keeps nothing.
pub fn date_range_filter<R: Dated + Clone>(records: &[R], lo: NaiveDate, hi: NaiveDate) -> Vec<R> {
    filter_by_range(records, &DateRange::new(lo, hi))
}

/// Same as [`date_range_filter`], taking the bounds as a [`DateRange`].
pub fn filter_by_range<R: Dated + Clone>(records: &[R], range: &DateRange) -> Vec<R> {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}
