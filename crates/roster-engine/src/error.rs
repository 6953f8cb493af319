//! Error types for roster-engine operations.
//!
//! The expansion and conflict-detection functions are total; only record
//! normalization can fail, and only on shapes the upstream validation layer
//! should never produce.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid day of week: {0} (expected 0-6, Sunday = 0)")]
    InvalidWeekday(u8),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
