//! Occurrence expansion — materializes a schedule into the concrete time
//! intervals it occupies inside a date window.
//!
//! The expander is a pure leaf: it reads one [`Schedule`] and a window and
//! returns dated intervals, one per matching calendar day, for the caller's
//! calendar grid.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::interval::clamp_to_window;
use crate::schedule::{DateRange, Recurrence, Schedule, TimeRange};

/// One dated instance of a schedule's time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Expand a schedule into every occurrence that falls inside the inclusive
/// date window `[window_start, window_end]`.
///
/// A one-time schedule yields its single interval, untouched, when its dates
/// intersect the window. A recurring schedule yields one occurrence per
/// candidate day of the intersection of the window and its date bounds; a
/// missing bound is capped by the window edge, so a fully unbounded
/// recurrence expands across the whole window. Occurrences come back in
/// ascending date order.
///
/// Degenerate inputs — a reversed window, reversed date bounds, or a
/// time-of-day range that is not strictly increasing — yield an empty list.
pub fn expand(
    schedule: &Schedule,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<Occurrence> {
    match &schedule.recurrence {
        Recurrence::OneTime { start, end } => {
            let touches_window = start.date() <= window_end && end.date() >= window_start;
            if *start < *end && touches_window {
                vec![Occurrence {
                    start: *start,
                    end: *end,
                }]
            } else {
                Vec::new()
            }
        }
        Recurrence::Daily { time, dates } => {
            expand_recurring(time, dates, None, window_start, window_end)
        }
        Recurrence::Weekly {
            weekday,
            time,
            dates,
        } => expand_recurring(time, dates, Some(*weekday), window_start, window_end),
    }
}

fn expand_recurring(
    time: &TimeRange,
    dates: &DateRange,
    weekday: Option<Weekday>,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<Occurrence> {
    if !time.is_valid() {
        return Vec::new();
    }
    let Some((first, last)) = clamp_to_window(dates, window_start, window_end) else {
        return Vec::new();
    };

    let time = *time;
    days_inclusive(first, last)
        .filter(move |day| weekday.is_none_or(|w| day.weekday() == w))
        .map(move |day| Occurrence {
            start: day.and_time(time.start),
            end: day.and_time(time.end),
        })
        .collect()
}

/// Iterate every day from `first` through `last`, both inclusive.
fn days_inclusive(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(first), move |day| {
        day.checked_add_days(Days::new(1))
            .filter(|next| *next <= last)
    })
}
