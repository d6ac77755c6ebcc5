//! Advisory snapshot for the external conflict-explanation collaborator.
//!
//! The collaborator — a language model behind [`ConflictExplainer`] —
//! receives a JSON payload of denormalized schedule rows plus a
//! constraint-name → priority map, and returns free-text conflict and
//! suggestion strings. Its output is advisory only and never gates
//! persistence; the deterministic checks in [`crate::conflict`] are the
//! authority.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::ClassDay;
use crate::store::ScheduleData;
use crate::timeslot::TimeOfDay;

/// Priority level attached to a named constraint in the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintPriority {
    Mandatory,
    High,
    Medium,
    Low,
}

/// One schedule row with every reference resolved to a display name, so the
/// collaborator needs no id lookups. Dangling references fall back to the
/// raw id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventView {
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub group: String,
    pub day: ClassDay,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Absolute validity range, resolved from the relative week window.
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// The serialized request handed to the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub events: Vec<EventView>,
    pub priorities: BTreeMap<String, ConstraintPriority>,
}

impl ExplainRequest {
    /// The wire form the collaborator actually receives.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The collaborator's free-text analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Advisory {
    pub conflicts: Vec<String>,
    pub suggestions: Vec<String>,
}

/// External analysis collaborator. Best-effort: failures are reported, not
/// retried, and never block a write.
pub trait ConflictExplainer {
    fn explain(&self, request: &ExplainRequest) -> Result<Advisory>;
}

/// Default priorities: every hard constraint is mandatory, the weekly-hour
/// cap is advisory.
pub fn default_priorities() -> BTreeMap<String, ConstraintPriority> {
    BTreeMap::from([
        ("room_capacity".to_string(), ConstraintPriority::Mandatory),
        ("teacher_clash".to_string(), ConstraintPriority::Mandatory),
        ("room_clash".to_string(), ConstraintPriority::Mandatory),
        ("group_clash".to_string(), ConstraintPriority::Mandatory),
        ("course_overlap".to_string(), ConstraintPriority::Mandatory),
        ("teacher_weekly_load".to_string(), ConstraintPriority::Medium),
    ])
}

/// Build the request payload from a snapshot.
///
/// Rows whose owning course is missing are omitted — without a course there
/// is no anchor to resolve their dates against.
pub fn build_request(
    data: &ScheduleData,
    priorities: BTreeMap<String, ConstraintPriority>,
) -> ExplainRequest {
    let events = data
        .events
        .iter()
        .filter_map(|event| {
            let course = data.course(&event.course_id)?;
            let window = event.absolute_window(course);
            Some(EventView {
                subject: data
                    .subject(&course.subject_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| course.subject_id.clone()),
                teacher: data
                    .teacher(&event.teacher_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| event.teacher_id.clone()),
                room: data
                    .classroom(&event.classroom_id)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| event.classroom_id.clone()),
                group: data
                    .group(&course.group_id)
                    .map(|g| g.name.clone())
                    .unwrap_or_else(|| course.group_id.clone()),
                day: event.day,
                start_time: event.start_time,
                end_time: event.end_time,
                from: window.start,
                to: window.end,
            })
        })
        .collect();

    ExplainRequest { events, priorities }
}
