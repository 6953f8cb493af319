//! Tests for occurrence expansion.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use roster_engine::{expand, DateRange, Recurrence, Schedule, TimeRange};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(time(h, min))
}

fn schedule(recurrence: Recurrence) -> Schedule {
    Schedule {
        id: "s1".to_string(),
        instructor_id: "i1".to_string(),
        classroom_id: "c1".to_string(),
        location_id: "l1".to_string(),
        recurrence,
    }
}

fn bounded(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        start: Some(start),
        end: Some(end),
    }
}

// ---------------------------------------------------------------------------
// One-time schedules
// ---------------------------------------------------------------------------

#[test]
fn one_time_outside_window_yields_nothing() {
    let s = schedule(Recurrence::OneTime {
        start: dt(2024, 2, 15, 9, 0),
        end: dt(2024, 2, 15, 10, 0),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert!(occ.is_empty(), "occurrence outside window must be dropped");
}

#[test]
fn one_time_inside_window_returned_untouched() {
    let s = schedule(Recurrence::OneTime {
        start: dt(2024, 1, 15, 9, 0),
        end: dt(2024, 1, 15, 10, 30),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0].start, dt(2024, 1, 15, 9, 0));
    assert_eq!(occ[0].end, dt(2024, 1, 15, 10, 30));
}

#[test]
fn one_time_on_window_boundary_is_included() {
    // Both window edges are inclusive.
    let s = schedule(Recurrence::OneTime {
        start: dt(2024, 1, 31, 9, 0),
        end: dt(2024, 1, 31, 10, 0),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(occ.len(), 1);
}

#[test]
fn one_time_with_reversed_times_yields_nothing() {
    let s = schedule(Recurrence::OneTime {
        start: dt(2024, 1, 15, 10, 0),
        end: dt(2024, 1, 15, 9, 0),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert!(occ.is_empty(), "reversed interval must not panic or emit");
}

// ---------------------------------------------------------------------------
// Daily recurrence
// ---------------------------------------------------------------------------

#[test]
fn daily_bounded_yields_one_occurrence_per_day() {
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: bounded(date(2024, 1, 1), date(2024, 1, 7)),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(occ.len(), 7, "one occurrence per bounded day");

    for (i, o) in occ.iter().enumerate() {
        let day = date(2024, 1, 1 + i as u32);
        assert_eq!(o.start, day.and_time(time(9, 0)));
        assert_eq!(o.end, day.and_time(time(10, 0)));
    }
}

#[test]
fn daily_clipped_to_window_intersection() {
    // Bounds start before the window; only the in-window days materialize.
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(14, 0),
            end: time(15, 0),
        },
        dates: bounded(date(2023, 12, 25), date(2024, 1, 5)),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(occ.len(), 5, "Jan 1 through Jan 5");
    assert_eq!(occ[0].start.date(), date(2024, 1, 1));
    assert_eq!(occ[4].start.date(), date(2024, 1, 5));
}

#[test]
fn daily_unbounded_is_capped_by_the_window() {
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: DateRange::default(),
    });

    let occ = expand(&s, date(2024, 3, 1), date(2024, 3, 10));
    assert_eq!(occ.len(), 10, "unbounded recurrence fills the whole window");
}

#[test]
fn daily_multi_year_window_count() {
    // 2024 is a leap year: 366 + 365 days.
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(8, 0),
            end: time(8, 30),
        },
        dates: DateRange::default(),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2025, 12, 31));
    assert_eq!(occ.len(), 731);
}

#[test]
fn daily_bounds_disjoint_from_window_yield_nothing() {
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: bounded(date(2023, 6, 1), date(2023, 6, 30)),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert!(occ.is_empty());
}

// ---------------------------------------------------------------------------
// Weekly recurrence
// ---------------------------------------------------------------------------

#[test]
fn weekly_selects_only_the_requested_weekday() {
    // 2024-01-01 is a Monday; January 2024 has five Mondays.
    let s = schedule(Recurrence::Weekly {
        weekday: Weekday::Mon,
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: bounded(date(2024, 1, 1), date(2024, 1, 31)),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    let days: Vec<u32> = occ.iter().map(|o| o.start.day()).collect();
    assert_eq!(days, vec![1, 8, 15, 22, 29]);
    for o in &occ {
        assert_eq!(o.start.weekday(), Weekday::Mon);
        assert_eq!(o.start.time(), time(9, 0));
        assert_eq!(o.end.time(), time(10, 0));
    }
}

#[test]
fn weekly_with_no_matching_day_in_window_yields_nothing() {
    // 2024-01-01 (Mon) through 2024-01-04 (Thu) contains no Friday.
    let s = schedule(Recurrence::Weekly {
        weekday: Weekday::Fri,
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: DateRange::default(),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 4));
    assert!(occ.is_empty());
}

#[test]
fn weekly_occurrence_on_both_boundary_days() {
    // Window runs Monday to Monday; both edge Mondays must appear.
    let s = schedule(Recurrence::Weekly {
        weekday: Weekday::Mon,
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: DateRange::default(),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 8));
    let days: Vec<NaiveDate> = occ.iter().map(|o| o.start.date()).collect();
    assert_eq!(days, vec![date(2024, 1, 1), date(2024, 1, 8)]);
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn reversed_date_bounds_yield_nothing() {
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: bounded(date(2024, 1, 31), date(2024, 1, 1)),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert!(occ.is_empty());
}

#[test]
fn reversed_time_of_day_yields_nothing() {
    // End-of-day before start-of-day is treated as degenerate, never as a
    // midnight-crossing span.
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(22, 0),
            end: time(6, 0),
        },
        dates: bounded(date(2024, 1, 1), date(2024, 1, 7)),
    });

    let occ = expand(&s, date(2024, 1, 1), date(2024, 1, 31));
    assert!(occ.is_empty());
}

#[test]
fn reversed_window_yields_nothing() {
    let s = schedule(Recurrence::Daily {
        time: TimeRange {
            start: time(9, 0),
            end: time(10, 0),
        },
        dates: DateRange::default(),
    });

    let occ = expand(&s, date(2024, 1, 31), date(2024, 1, 1));
    assert!(occ.is_empty());
}

#[test]
fn expansion_is_deterministic() {
    let s = schedule(Recurrence::Weekly {
        weekday: Weekday::Wed,
        time: TimeRange {
            start: time(11, 0),
            end: time(12, 0),
        },
        dates: bounded(date(2024, 1, 1), date(2024, 6, 30)),
    });

    let a = expand(&s, date(2024, 1, 1), date(2024, 3, 31));
    let b = expand(&s, date(2024, 1, 1), date(2024, 3, 31));
    assert_eq!(a, b);
}
