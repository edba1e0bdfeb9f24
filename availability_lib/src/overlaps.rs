use crate::date_ranges::DateRange;
use chrono::{DateTime, Utc};

/// Whether the two ranges overlap.  Bounds are inclusive, so ranges that
/// share a single boundary instant overlap.
///
/// This is true when any of the following holds:
/// ```text
///    [---- a ----]
///         [---- b ----]     b starts within a
///
///         [---- a ----]
///    [---- b ----]          b ends within a
///
///      [-- a --]
///    [----- b -----]        b strictly contains a
/// ```
/// Invalid ranges never overlap anything.
///
/// The test is not symmetric for reversed ranges (start after end): only
/// `b` is checked for strictly containing `a`.
#[must_use]
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    let (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) =
        (a.start_date, a.end_date, b.start_date, b.end_date)
    else {
        return false;
    };
    let within_a = |t: DateTime<Utc>| a_start <= t && t <= a_end;
    within_a(b_start) || within_a(b_end) || (b_start < a_start && a_end < b_end)
}

/// Position of the first range in `ranges` that overlaps `candidate`, as
/// per [`ranges_overlap(range, candidate)`](ranges_overlap).
#[must_use]
pub fn find_overlapping_range(
    ranges: &[DateRange],
    candidate: &DateRange,
) -> Option<usize> {
    ranges.iter().position(|r| ranges_overlap(r, candidate))
}
