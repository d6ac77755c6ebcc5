//! Hard-constraint detection for candidate recurring assignments.
//!
//! Checks run in a fixed precedence order and the first failure returns
//! immediately: room capacity, then a per-weekday pairwise clash scan
//! (teacher, then room, then group), then the non-blocking teacher
//! weekly-hour check. A clash on any requested weekday aborts the whole
//! operation — there is no partial application across weekdays.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::{Result, ScheduleError};
use crate::model::ClassDay;
use crate::store::ScheduleData;
use crate::timeslot::{self, TimeOfDay};
use crate::weeks::{self, DateSpan};

/// A hard constraint violation. Blocks the write entirely; the message names
/// the colliding resource so a UI can render an actionable explanation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    #[error(
        "capacity conflict: group {group} has {students} students but room {room} seats {capacity}"
    )]
    Capacity {
        group: String,
        room: String,
        students: u32,
        capacity: u32,
    },

    #[error("teacher conflict: {teacher} is already booked {day} {start}-{end}")]
    Teacher {
        teacher: String,
        day: ClassDay,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("room conflict: {room} is already occupied {day} {start}-{end}")]
    Room {
        room: String,
        day: ClassDay,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("group conflict: {group} already has class {day} {start}-{end}")]
    Group {
        group: String,
        day: ClassDay,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("course overlap: {group} already takes {subject} from {start} to {end}")]
    CourseOverlap {
        group: String,
        subject: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Non-blocking advisory: the assignment would push the teacher's weekly
/// load above the contract cap. The write proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadWarning {
    /// Teacher display name.
    pub teacher: String,
    /// Existing weekly load in minutes, replaced rows excluded.
    pub assigned_minutes: u32,
    /// This assignment's contribution (duration × weekday count).
    pub added_minutes: u32,
    pub max_weekly_hours: u32,
}

impl OverloadWarning {
    /// Projected weekly load in hours.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.assigned_minutes + self.added_minutes) / 60.0
    }
}

impl fmt::Display for OverloadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} would carry {:.1}h per week, above the {}h cap",
            self.teacher,
            self.total_hours(),
            self.max_weekly_hours
        )
    }
}

/// A candidate recurring assignment, with its validity window already
/// resolved to absolute dates (see [`crate::weeks::window_to_dates`]).
#[derive(Debug, Clone)]
pub struct CandidateAssignment {
    pub course_id: String,
    pub teacher_id: String,
    pub classroom_id: String,
    pub days: Vec<ClassDay>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub window: DateSpan,
}

/// Validate a candidate against an immutable snapshot of all collections.
///
/// `exclude` holds the ids of rows being replaced on edit; they are never
/// compared against, so re-submitting an assignment unchanged cannot
/// conflict with itself.
///
/// Returns `Ok(None)` on a clean pass, `Ok(Some(warning))` when only the
/// soft weekly-hour constraint is violated, and `Err` on the first hard
/// failure.
pub fn check_assignment(
    data: &ScheduleData,
    candidate: &CandidateAssignment,
    exclude: &HashSet<String>,
) -> Result<Option<OverloadWarning>> {
    let course = data
        .course(&candidate.course_id)
        .ok_or_else(|| unknown("course", &candidate.course_id))?;
    let group = data
        .group(&course.group_id)
        .ok_or_else(|| unknown("group", &course.group_id))?;
    let room = data
        .classroom(&candidate.classroom_id)
        .ok_or_else(|| unknown("classroom", &candidate.classroom_id))?;
    let teacher = data
        .teacher(&candidate.teacher_id)
        .ok_or_else(|| unknown("teacher", &candidate.teacher_id))?;

    // 1. Capacity — independent of day and time.
    if group.student_count > room.capacity {
        return Err(Conflict::Capacity {
            group: group.name.clone(),
            room: room.name.clone(),
            students: group.student_count,
            capacity: room.capacity,
        }
        .into());
    }

    // 2. Pairwise clash scan. Cheap rejections first: wrong day, disjoint
    // times, disjoint absolute week windows.
    for &day in &candidate.days {
        for existing in &data.events {
            if existing.day != day || exclude.contains(&existing.id) {
                continue;
            }
            if !timeslot::ranges_overlap(
                candidate.start_time,
                candidate.end_time,
                existing.start_time,
                existing.end_time,
            ) {
                continue;
            }
            // Each event's weeks resolve against its own course. An orphaned
            // row whose course was deleted cannot be placed on the calendar;
            // skip it.
            let Some(other_course) = data.course(&existing.course_id) else {
                continue;
            };
            let other_window =
                weeks::window_to_dates(other_course.start_date, existing.week_window());
            if !candidate.window.overlaps(&other_window) {
                continue;
            }

            if existing.teacher_id == candidate.teacher_id {
                return Err(Conflict::Teacher {
                    teacher: teacher.name.clone(),
                    day,
                    start: existing.start_time,
                    end: existing.end_time,
                }
                .into());
            }
            if existing.classroom_id == candidate.classroom_id {
                return Err(Conflict::Room {
                    room: room.name.clone(),
                    day,
                    start: existing.start_time,
                    end: existing.end_time,
                }
                .into());
            }
            if other_course.group_id == course.group_id {
                return Err(Conflict::Group {
                    group: group.name.clone(),
                    day,
                    start: existing.start_time,
                    end: existing.end_time,
                }
                .into());
            }
        }
    }

    // 3. Weekly-hour load. Deliberately week-window-agnostic: every assigned
    // hour counts as concurrent weekly load.
    let assigned: u32 = data
        .events
        .iter()
        .filter(|e| e.teacher_id == candidate.teacher_id && !exclude.contains(&e.id))
        .map(|e| e.duration_minutes())
        .sum();
    let added = timeslot::duration_minutes(candidate.start_time, candidate.end_time)
        * candidate.days.len() as u32;
    if assigned + added > teacher.max_weekly_hours * 60 {
        return Ok(Some(OverloadWarning {
            teacher: teacher.name.clone(),
            assigned_minutes: assigned,
            added_minutes: added,
            max_weekly_hours: teacher.max_weekly_hours,
        }));
    }

    Ok(None)
}

fn unknown(kind: &'static str, id: &str) -> ScheduleError {
    ScheduleError::Unknown {
        kind,
        id: id.to_string(),
    }
}
