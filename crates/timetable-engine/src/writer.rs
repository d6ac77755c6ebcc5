//! Assignment planning: expand one validated submission into per-weekday
//! event rows plus the deletions that replace a prior version.
//!
//! An edit is delete-then-recreate: the prior rows are removed and fresh
//! rows written in one batch. The store applies a batch atomically — all
//! deletions and creations succeed together or none do.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conflict::{self, CandidateAssignment, OverloadWarning};
use crate::error::{Result, ScheduleError};
use crate::model::{ClassDay, ScheduleEvent};
use crate::store::ScheduleData;
use crate::timeslot::TimeOfDay;
use crate::weeks::{self, WeekWindow};

/// One form submission, shaped the way the editing UI supplies it: relative
/// weeks, one or more weekdays, and the rows being replaced on edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub course_id: String,
    pub teacher_id: String,
    pub classroom_id: String,
    pub days: Vec<ClassDay>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub start_week: u32,
    pub end_week: u32,
    /// Event ids of the prior version being replaced. Empty on create.
    #[serde(default)]
    pub replace: Vec<String>,
}

/// An atomic multi-row write: deletions applied before creations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WriteBatch {
    pub deletes: Vec<String>,
    pub creates: Vec<ScheduleEvent>,
}

/// Validate a submission and plan the batch that persists it.
///
/// Field-level sanity (weekday set, time order, week window) is rejected
/// before the conflict scan runs. On success the batch holds the replaced
/// rows as deletions plus exactly one new row per requested weekday, all
/// sharing a freshly generated `assignment_id` and identical non-day fields.
///
/// Returns the batch together with the soft overload warning, if any — the
/// warning never blocks the write.
pub fn plan_assignment(
    data: &ScheduleData,
    req: &AssignmentRequest,
) -> Result<(WriteBatch, Option<OverloadWarning>)> {
    if req.days.is_empty() {
        return Err(ScheduleError::EmptyDaySet);
    }
    let mut seen = HashSet::new();
    for &day in &req.days {
        if !seen.insert(day) {
            return Err(ScheduleError::DuplicateDay(day));
        }
    }
    if req.end_time <= req.start_time {
        return Err(ScheduleError::InvalidTimeRange {
            start: req.start_time,
            end: req.end_time,
        });
    }
    let window = WeekWindow::new(req.start_week, req.end_week)?;

    let course = data.course(&req.course_id).ok_or_else(|| ScheduleError::Unknown {
        kind: "course",
        id: req.course_id.clone(),
    })?;

    let candidate = CandidateAssignment {
        course_id: req.course_id.clone(),
        teacher_id: req.teacher_id.clone(),
        classroom_id: req.classroom_id.clone(),
        days: req.days.clone(),
        start_time: req.start_time,
        end_time: req.end_time,
        window: weeks::window_to_dates(course.start_date, window),
    };
    let exclude: HashSet<String> = req.replace.iter().cloned().collect();
    let warning = conflict::check_assignment(data, &candidate, &exclude)?;

    let assignment_id = Uuid::new_v4().to_string();
    let creates = req
        .days
        .iter()
        .map(|&day| ScheduleEvent {
            id: Uuid::new_v4().to_string(),
            assignment_id: assignment_id.clone(),
            course_id: req.course_id.clone(),
            teacher_id: req.teacher_id.clone(),
            classroom_id: req.classroom_id.clone(),
            day,
            start_time: req.start_time,
            end_time: req.end_time,
            start_week: window.start_week,
            end_week: window.end_week,
        })
        .collect();

    Ok((
        WriteBatch {
            deletes: req.replace.clone(),
            creates,
        },
        warning,
    ))
}

/// The sibling rows of one logical recurring assignment.
pub fn assignment_rows<'a>(
    events: &'a [ScheduleEvent],
    assignment_id: &str,
) -> Vec<&'a ScheduleEvent> {
    events
        .iter()
        .filter(|e| e.assignment_id == assignment_id)
        .collect()
}
