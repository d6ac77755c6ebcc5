//! Wall-clock times of day and half-open range overlap.
//!
//! The scheduling domain has no timezone concept — times are naive wall-clock
//! minutes within a day. Two ranges overlap iff `start_a < end_b && start_b <
//! end_a`; ranges that merely touch (one ends exactly when the other starts)
//! are NOT overlapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Serializes as `"HH:MM"`. Ordering is plain minute ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour/minute components. `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Parse a `"HH:MM"` string. A single-digit hour is accepted.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidTime`] for empty input, a missing `:`,
    /// non-numeric components, or an out-of-range hour/minute.
    pub fn parse(s: &str) -> Result<Self, ScheduleError> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        if hour_part.is_empty()
            || hour_part.len() > 2
            || minute_part.len() != 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
            || !minute_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_part.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Half-open overlap test for two same-day time ranges.
///
/// Touching ranges (`end_a == start_b`) do not overlap, so a class ending at
/// 10:00 never clashes with one starting at 10:00.
pub fn ranges_overlap(
    start_a: TimeOfDay,
    end_a: TimeOfDay,
    start_b: TimeOfDay,
    end_b: TimeOfDay,
) -> bool {
    start_a < end_b && start_b < end_a
}

/// Length of `[start, end)` in minutes. Zero when `end <= start`.
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> u32 {
    u32::from(end.0.saturating_sub(start.0))
}
