//! Schedule data model and record normalization.
//!
//! Schedules arrive from the portal's persistence layer as loosely-typed rows
//! ([`ScheduleRecord`]): a boolean recurrence flag, a nullable weekday column
//! doubling as the daily/weekly discriminator, and time-of-day stored in full
//! datetime columns anchored to an arbitrary fixed date. Normalization turns a
//! row into the tagged [`Recurrence`] form the engine pattern-matches on, and
//! drops the anchor-date convention entirely.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A time-of-day interval, independent of any calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// A range is usable only when it has positive length. A record whose end
    /// time-of-day is not after its start (including a would-be
    /// midnight-crossing range) produces no occurrences and no conflicts.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }
}

/// An inclusive calendar-date range; a missing bound is unbounded in that
/// direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Whether `date` falls inside the range. A reversed range contains
    /// nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| s <= date) && self.end.is_none_or(|e| date <= e)
    }
}

/// How a schedule generates occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    /// A single concrete occurrence.
    OneTime {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Every day within the date range.
    Daily { time: TimeRange, dates: DateRange },
    /// One weekday per week within the date range.
    Weekly {
        weekday: Weekday,
        time: TimeRange,
        dates: DateRange,
    },
}

/// One booking of an instructor to a classroom at a location.
///
/// All identifiers are opaque; display names never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub instructor_id: String,
    pub classroom_id: String,
    pub location_id: String,
    pub recurrence: Recurrence,
}

/// A raw schedule row as the persistence layer supplies it.
///
/// For recurring rows the date component of `start_time`/`end_time` is an
/// arbitrary anchor and only the time-of-day is meaningful; `day_of_week`
/// numbers weekdays 0-6 with Sunday = 0, and null means daily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: String,
    pub instructor_id: String,
    pub classroom_id: String,
    pub location_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_recurring: bool,
    #[serde(default)]
    pub day_of_week: Option<u8>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Schedule {
    /// Normalize a raw row into the tagged form.
    ///
    /// A non-recurring row keeps its datetime pair as-is; stray `day_of_week`
    /// or date-bound values on it are ignored. A recurring row keeps only the
    /// time-of-day component of its datetime columns.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidWeekday`] when a recurring row carries
    /// a `day_of_week` outside 0-6.
    pub fn from_record(record: ScheduleRecord) -> Result<Self> {
        let recurrence = if record.is_recurring {
            let time = TimeRange {
                start: record.start_time.time(),
                end: record.end_time.time(),
            };
            let dates = DateRange {
                start: record.start_date,
                end: record.end_date,
            };
            match record.day_of_week {
                None => Recurrence::Daily { time, dates },
                Some(day) => Recurrence::Weekly {
                    weekday: weekday_from_sunday0(day)?,
                    time,
                    dates,
                },
            }
        } else {
            Recurrence::OneTime {
                start: record.start_time,
                end: record.end_time,
            }
        };

        Ok(Schedule {
            id: record.id,
            instructor_id: record.instructor_id,
            classroom_id: record.classroom_id,
            location_id: record.location_id,
            recurrence,
        })
    }
}

/// Map the portal's 0-6 weekday numbering (Sunday = 0) to [`chrono::Weekday`].
fn weekday_from_sunday0(day: u8) -> Result<Weekday> {
    match day {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ScheduleError::InvalidWeekday(other)),
    }
}
