//! Cross-location conflict detection.
//!
//! Finds every case where one instructor is booked at two different locations
//! during overlapping time. Schedules at the same location never conflict
//! with each other, and touching endpoints never count as overlap.
//!
//! Recurring schedules are compared on their defining attributes (day
//! signature, date bounds, time-of-day) rather than by full expansion, so
//! unbounded recurrences need no window to be checked.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::interval::{overlaps, ranges_intersect};
use crate::schedule::{DateRange, Recurrence, Schedule, TimeRange};

/// One schedule inside a conflict group, carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictMember {
    pub schedule_id: String,
    pub classroom_id: String,
    pub location_id: String,
    pub recurrence: Recurrence,
}

/// Two or more schedules for one instructor, at more than one location, whose
/// time footprints transitively overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGroup {
    pub instructor_id: String,
    pub members: Vec<ConflictMember>,
}

/// Find every cross-location double-booking in `schedules`.
///
/// Schedules are partitioned by instructor; within each instructor every
/// unordered pair is tested with [`schedules_overlap`], same-location pairs
/// are skipped, and overlapping pairs are merged into maximal transitive
/// groups via union-find. A cluster of mutually overlapping schedules is
/// reported once, never as separate pairs.
///
/// Output is deterministic: groups are ordered by instructor id (then by
/// earliest member position), members keep input order. An empty input yields
/// an empty result.
pub fn find_conflicts(schedules: &[Schedule]) -> Vec<ConflictGroup> {
    let mut by_instructor: BTreeMap<&str, Vec<&Schedule>> = BTreeMap::new();
    for schedule in schedules {
        by_instructor
            .entry(&schedule.instructor_id)
            .or_default()
            .push(schedule);
    }

    let mut groups = Vec::new();
    for (instructor_id, list) in by_instructor {
        let mut sets = DisjointSets::new(list.len());
        for i in 0..list.len() {
            for j in (i + 1)..list.len() {
                // Co-located overlap is legitimate (back-to-back or shared
                // rooms); only cross-location double-booking is a conflict.
                if list[i].location_id == list[j].location_id {
                    continue;
                }
                if schedules_overlap(list[i], list[j]) {
                    sets.union(i, j);
                }
            }
        }

        for cluster in sets.clusters() {
            if cluster.len() < 2 {
                continue;
            }
            groups.push(ConflictGroup {
                instructor_id: instructor_id.to_string(),
                members: cluster.into_iter().map(|idx| member(list[idx])).collect(),
            });
        }
    }
    groups
}

/// Whether two schedules ever occupy overlapping time.
///
/// The rule depends on the recurrence-type combination:
///
/// - one-time × one-time: half-open datetime overlap;
/// - recurring × recurring: same day signature (daily with daily, or weekly
///   with equal weekday), intersecting date bounds, and half-open time-of-day
///   overlap — a daily and a weekly template have distinct signatures and are
///   not compared further;
/// - one-time × recurring: the one-time occurrence must satisfy the
///   template's weekday rule and fall inside its date bounds, then
///   time-of-day is compared half-open.
///
/// Reversed or empty intervals overlap nothing.
pub fn schedules_overlap(a: &Schedule, b: &Schedule) -> bool {
    use Recurrence::*;

    match (&a.recurrence, &b.recurrence) {
        (
            OneTime { start: s1, end: e1 },
            OneTime { start: s2, end: e2 },
        ) => overlaps(*s1, *e1, *s2, *e2),
        (
            Daily { time: t1, dates: d1 },
            Daily { time: t2, dates: d2 },
        ) => templates_overlap(t1, d1, t2, d2),
        (
            Weekly { weekday: w1, time: t1, dates: d1 },
            Weekly { weekday: w2, time: t2, dates: d2 },
        ) => w1 == w2 && templates_overlap(t1, d1, t2, d2),
        (Daily { .. }, Weekly { .. }) | (Weekly { .. }, Daily { .. }) => false,
        (OneTime { start, end }, Daily { time, dates })
        | (Daily { time, dates }, OneTime { start, end }) => {
            one_time_hits_template(*start, *end, time, dates, None)
        }
        (OneTime { start, end }, Weekly { weekday, time, dates })
        | (Weekly { weekday, time, dates }, OneTime { start, end }) => {
            one_time_hits_template(*start, *end, time, dates, Some(*weekday))
        }
    }
}

fn templates_overlap(t1: &TimeRange, d1: &DateRange, t2: &TimeRange, d2: &DateRange) -> bool {
    ranges_intersect(d1, d2) && overlaps(t1.start, t1.end, t2.start, t2.end)
}

fn one_time_hits_template(
    start: NaiveDateTime,
    end: NaiveDateTime,
    time: &TimeRange,
    dates: &DateRange,
    weekday: Option<Weekday>,
) -> bool {
    if start >= end {
        return false;
    }
    let day = start.date();
    weekday.is_none_or(|w| day.weekday() == w)
        && dates.contains(day)
        && overlaps(start.time(), end.time(), time.start, time.end)
}

fn member(schedule: &Schedule) -> ConflictMember {
    ConflictMember {
        schedule_id: schedule.id.clone(),
        classroom_id: schedule.classroom_id.clone(),
        location_id: schedule.location_id.clone(),
        recurrence: schedule.recurrence.clone(),
    }
}

/// Union-find over schedule positions within one instructor's list.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let parent = self.parent[i];
        if parent == i {
            return i;
        }
        let root = self.find(parent);
        self.parent[i] = root;
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Attach the later root to the earlier one so each cluster's root
            // is its earliest member.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }

    /// Collect members per root, preserving input order within each cluster
    /// and ordering clusters by their earliest member.
    fn clusters(&mut self) -> Vec<Vec<usize>> {
        let mut by_root: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for i in 0..self.parent.len() {
            let root = self.find(i);
            by_root.entry(root).or_default().push(i);
        }
        by_root.into_values().collect()
    }
}
