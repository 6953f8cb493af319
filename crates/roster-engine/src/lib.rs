//! # roster-engine
//!
//! Deterministic occurrence expansion and cross-location conflict detection
//! for instructor schedules.
//!
//! This crate is the scheduling core of a school portal. It is pure
//! computation over in-memory schedule snapshots: no I/O, no shared state,
//! safe to call concurrently. The portal's persistence layer supplies raw
//! [`ScheduleRecord`] rows; normalization turns them into tagged [`Schedule`]
//! values, and two independent components consume those:
//!
//! - [`expander`] — schedule + date window → concrete dated occurrences
//! - [`conflict`] — schedule set → groups of same-instructor, cross-location
//!   double-bookings
//! - [`interval`] — the shared half-open overlap rule
//! - [`schedule`] — data model and record normalization
//! - [`error`] — error types
//!
//! Overlap is half-open everywhere: intervals that only touch at an endpoint
//! do not overlap, so back-to-back classes never conflict.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster_engine::{expand, DateRange, Recurrence, Schedule, TimeRange};
//!
//! let schedule = Schedule {
//!     id: "s1".into(),
//!     instructor_id: "i1".into(),
//!     classroom_id: "c1".into(),
//!     location_id: "l1".into(),
//!     recurrence: Recurrence::Weekly {
//!         weekday: chrono::Weekday::Mon,
//!         time: TimeRange {
//!             start: "09:00:00".parse().unwrap(),
//!             end: "10:00:00".parse().unwrap(),
//!         },
//!         dates: DateRange::default(),
//!     },
//! };
//!
//! let window_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let window_end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let occurrences = expand(&schedule, window_start, window_end);
//! assert_eq!(occurrences.len(), 5); // five Mondays in January 2024
//! ```

pub mod conflict;
pub mod error;
pub mod expander;
pub mod interval;
pub mod schedule;

pub use conflict::{find_conflicts, ConflictGroup, ConflictMember};
pub use error::ScheduleError;
pub use expander::{expand, Occurrence};
pub use schedule::{DateRange, Recurrence, Schedule, ScheduleRecord, TimeRange};
