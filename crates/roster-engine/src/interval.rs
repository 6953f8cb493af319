//! Half-open interval logic shared by the expander and the conflict detector.

use chrono::NaiveDate;

use crate::schedule::DateRange;

/// Half-open overlap: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && s2 < e1`.
///
/// Intervals that only touch at an endpoint do not overlap, and an empty or
/// reversed interval overlaps nothing.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < a_end && b_start < b_end && a_start < b_end && b_start < a_end
}

/// Whether two optionally-bounded inclusive date ranges share at least one
/// day. A missing bound is unbounded; a reversed range intersects nothing.
pub fn ranges_intersect(a: &DateRange, b: &DateRange) -> bool {
    if is_reversed(a) || is_reversed(b) {
        return false;
    }
    bound_le(a.start, b.end) && bound_le(b.start, a.end)
}

/// Clamp an optionally-bounded date range to an inclusive window, returning
/// the concrete day span or `None` when the intersection is empty. A missing
/// bound is capped by the corresponding window edge.
pub fn clamp_to_window(
    dates: &DateRange,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let first = dates.start.map_or(window_start, |s| s.max(window_start));
    let last = dates.end.map_or(window_end, |e| e.min(window_end));
    (first <= last).then_some((first, last))
}

fn is_reversed(range: &DateRange) -> bool {
    matches!((range.start, range.end), (Some(s), Some(e)) if e < s)
}

/// `start <= end`, where a missing bound always satisfies the comparison.
fn bound_le(start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    match (start, end) {
        (Some(s), Some(e)) => s <= e,
        _ => true,
    }
}
