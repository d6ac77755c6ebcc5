//! Free-slot computation for a teacher or a room.
//!
//! Collects the resource's busy ranges on one weekday of one concrete date
//! (week windows are resolved against each event's own course), merges
//! overlapping busy periods, then returns the gaps within a bounding time
//! window, sorted by start.

use chrono::NaiveDate;

use crate::model::{ClassDay, ScheduleEvent};
use crate::store::ScheduleData;
use crate::timeslot::{self, TimeOfDay};

/// A free time slot within the queried window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_minutes: u32,
}

/// Free slots for a teacher on `day` of the week containing `on_date`.
pub fn free_slots_for_teacher(
    data: &ScheduleData,
    teacher_id: &str,
    day: ClassDay,
    on_date: NaiveDate,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
) -> Vec<FreeSlot> {
    free_slots(
        data,
        |e| e.teacher_id == teacher_id,
        day,
        on_date,
        window_start,
        window_end,
    )
}

/// Free slots for a classroom on `day` of the week containing `on_date`.
pub fn free_slots_for_room(
    data: &ScheduleData,
    classroom_id: &str,
    day: ClassDay,
    on_date: NaiveDate,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
) -> Vec<FreeSlot> {
    free_slots(
        data,
        |e| e.classroom_id == classroom_id,
        day,
        on_date,
        window_start,
        window_end,
    )
}

/// First slot of at least `min_minutes`, if any.
pub fn first_fitting(slots: &[FreeSlot], min_minutes: u32) -> Option<&FreeSlot> {
    slots.iter().find(|s| s.duration_minutes >= min_minutes)
}

fn free_slots(
    data: &ScheduleData,
    belongs: impl Fn(&ScheduleEvent) -> bool,
    day: ClassDay,
    on_date: NaiveDate,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
) -> Vec<FreeSlot> {
    if window_end <= window_start {
        return Vec::new();
    }

    // Busy ranges active on that date, clipped to the window. Events whose
    // course is gone cannot be resolved to absolute weeks and are skipped.
    let mut busy: Vec<(TimeOfDay, TimeOfDay)> = data
        .events
        .iter()
        .filter(|e| e.day == day && belongs(e))
        .filter(|e| {
            data.course(&e.course_id)
                .is_some_and(|c| e.absolute_window(c).contains(on_date))
        })
        .filter(|e| {
            timeslot::ranges_overlap(e.start_time, e.end_time, window_start, window_end)
        })
        .map(|e| (e.start_time.max(window_start), e.end_time.min(window_end)))
        .collect();

    busy.sort();

    // Merge overlapping or touching busy ranges.
    let mut merged: Vec<(TimeOfDay, TimeOfDay)> = Vec::new();
    for (start, end) in busy {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    // Gaps between merged busy ranges are the free slots.
    let mut slots = Vec::new();
    let mut cursor = window_start;
    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            slots.push(FreeSlot {
                start: cursor,
                end: *busy_start,
                duration_minutes: timeslot::duration_minutes(cursor, *busy_start),
            });
        }
        cursor = cursor.max(*busy_end);
    }
    if cursor < window_end {
        slots.push(FreeSlot {
            start: cursor,
            end: window_end,
            duration_minutes: timeslot::duration_minutes(cursor, window_end),
        });
    }

    slots
}
