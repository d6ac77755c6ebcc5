//! Translation between relative week windows and absolute calendar dates.
//!
//! Recurring events are persisted as 1-based `(start_week, end_week)` offsets
//! relative to their owning course's start date — compact, and robust to the
//! course being rescheduled wholesale. Editing and conflict detection reason
//! in absolute calendar time instead, because two events can belong to
//! courses that start on different dates. This module is the two-way mapping.
//!
//! Week 1 is the Monday-aligned calendar week containing the course's start
//! date; all week arithmetic uses Monday-start weeks. The mapping is exact
//! across month and year boundaries because it is pure day arithmetic on
//! Mondays.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Monday of the calendar week containing `date`.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive overlap: spans sharing a boundary date DO overlap.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A 1-based relative week range, `start_week <= end_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start_week: u32,
    pub end_week: u32,
}

impl WeekWindow {
    /// # Errors
    /// Returns [`ScheduleError::InvalidWeekWindow`] unless
    /// `1 <= start_week <= end_week`.
    pub fn new(start_week: u32, end_week: u32) -> Result<Self> {
        if start_week < 1 || end_week < start_week {
            return Err(ScheduleError::InvalidWeekWindow {
                start_week,
                end_week,
            });
        }
        Ok(Self {
            start_week,
            end_week,
        })
    }
}

/// Resolve a relative week window against a course start date.
///
/// The absolute start is the Monday of week `start_week`; the absolute end is
/// the Sunday closing week `end_week`.
pub fn window_to_dates(course_start: NaiveDate, window: WeekWindow) -> DateSpan {
    let anchor = week_anchor(course_start);
    let start = anchor + Duration::weeks(i64::from(window.start_week) - 1);
    let end = anchor + Duration::weeks(i64::from(window.end_week) - 1) + Duration::days(6);
    DateSpan::new(start, end)
}

/// Inverse of [`window_to_dates`]: map an absolute date span back to week
/// numbers relative to the course's anchor week.
///
/// # Errors
/// Returns [`ScheduleError::WeekBeforeCourseStart`] when either date falls in
/// a week before the course's first week, and
/// [`ScheduleError::InvalidWeekWindow`] for a reversed span.
pub fn dates_to_window(course_start: NaiveDate, span: DateSpan) -> Result<WeekWindow> {
    let anchor = week_anchor(course_start);
    let start_week = relative_week(anchor, span.start)?;
    let end_week = relative_week(anchor, span.end)?;
    WeekWindow::new(start_week, end_week)
}

/// 1-based week number of `date` relative to an anchor Monday.
fn relative_week(anchor: NaiveDate, date: NaiveDate) -> Result<u32> {
    let week = (week_anchor(date) - anchor).num_days().div_euclid(7) + 1;
    if week < 1 {
        return Err(ScheduleError::WeekBeforeCourseStart { week });
    }
    Ok(week as u32)
}

/// Monday-aligned calendar-week span covering `[start, end]`.
///
/// At least 1 whenever `end >= start`; this is the derived `duration_weeks`
/// of a course.
pub fn calendar_week_span(start: NaiveDate, end: NaiveDate) -> i64 {
    (week_anchor(end) - week_anchor(start)).num_days().div_euclid(7) + 1
}
