//! Course-level date-range overlap guard.
//!
//! Coarser than the per-event clash scan: a group cannot be enrolled in two
//! subject offerings over intersecting date ranges, whatever their weekly
//! class times. Bounds are inclusive, unlike the half-open time check — two
//! courses sharing a single calendar day collide.

use crate::conflict::Conflict;
use crate::error::{Result, ScheduleError};
use crate::model::Course;
use crate::store::ScheduleData;

/// Validate a new or edited course against the other courses of its group.
///
/// The candidate's own id is skipped, so editing a course without moving its
/// dates cannot collide with itself.
///
/// # Errors
/// [`ScheduleError::InvalidDateRange`] when the range is malformed (rejected
/// before any scan), or a [`Conflict::CourseOverlap`] naming the colliding
/// offering's subject.
pub fn check_course(data: &ScheduleData, candidate: &Course) -> Result<()> {
    if candidate.end_date <= candidate.start_date {
        return Err(ScheduleError::InvalidDateRange {
            start: candidate.start_date,
            end: candidate.end_date,
        });
    }

    for other in &data.courses {
        if other.id == candidate.id || other.group_id != candidate.group_id {
            continue;
        }
        if candidate.span().overlaps(&other.span()) {
            // Fall back to raw ids for dangling references.
            let subject = data
                .subject(&other.subject_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| other.subject_id.clone());
            let group = data
                .group(&candidate.group_id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| candidate.group_id.clone());
            return Err(Conflict::CourseOverlap {
                group,
                subject,
                start: other.start_date,
                end: other.end_date,
            }
            .into());
        }
    }

    Ok(())
}
