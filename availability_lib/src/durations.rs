use crate::date_ranges::DateRange;
use std::cmp::Ordering;

/// Compare the lengths (end - start) of the two ranges, regardless of where
/// they are in time.
/// Returns None when either range is missing a bound.
#[must_use]
pub fn compare_range_durations(a: &DateRange, b: &DateRange) -> Option<Ordering> {
    Some(a.duration()?.cmp(&b.duration()?))
}
