//! Error types for timetable validation and persistence.

use chrono::NaiveDate;
use thiserror::Error;

use crate::conflict::Conflict;
use crate::model::ClassDay;
use crate::timeslot::TimeOfDay;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Malformed `"HH:MM"` input (empty, non-numeric, or out of range).
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// A time range must end strictly after it starts.
    #[error("invalid time range: end {end} is not after start {start}")]
    InvalidTimeRange { start: TimeOfDay, end: TimeOfDay },

    /// A course date range must end strictly after it starts.
    #[error("invalid date range: end {end} is not after start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Week numbers are 1-based and the window must not be reversed.
    #[error("invalid week window: {start_week}..{end_week}")]
    InvalidWeekWindow { start_week: u32, end_week: u32 },

    /// A date resolved to a week before the owning course begins.
    #[error("week {week} falls before the course's first week")]
    WeekBeforeCourseStart { week: i64 },

    /// An assignment needs at least one weekday.
    #[error("no weekdays requested")]
    EmptyDaySet,

    /// The same weekday was requested more than once.
    #[error("weekday {0} requested more than once")]
    DuplicateDay(ClassDay),

    /// The candidate references an entity missing from the snapshot.
    #[error("unknown {kind} '{id}'")]
    Unknown { kind: &'static str, id: String },

    /// A hard constraint violation. Blocks the write entirely.
    #[error(transparent)]
    Conflict(#[from] Conflict),

    /// The storage collaborator refused a write that passed validation.
    /// Distinct from a conflict: the batch was legal but the store said no.
    #[error("storage denied the write: {0}")]
    Storage(String),
}

/// Convenience alias used throughout timetable-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
