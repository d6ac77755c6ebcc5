//! Entity model: teachers, classrooms, subjects, groups, courses, and the
//! per-weekday rows of recurring class assignments.
//!
//! All types are plain serde structs with `String` ids; cross-entity
//! invariants live in [`crate::conflict`] and [`crate::course`], not here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timeslot::TimeOfDay;
use crate::weeks::{self, DateSpan, WeekWindow};

/// Weekday of a recurring class. Sunday is not a teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl ClassDay {
    pub const ALL: [ClassDay; 6] = [
        ClassDay::Monday,
        ClassDay::Tuesday,
        ClassDay::Wednesday,
        ClassDay::Thursday,
        ClassDay::Friday,
        ClassDay::Saturday,
    ];

    pub fn weekday(self) -> chrono::Weekday {
        match self {
            ClassDay::Monday => chrono::Weekday::Mon,
            ClassDay::Tuesday => chrono::Weekday::Tue,
            ClassDay::Wednesday => chrono::Weekday::Wed,
            ClassDay::Thursday => chrono::Weekday::Thu,
            ClassDay::Friday => chrono::Weekday::Fri,
            ClassDay::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl fmt::Display for ClassDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassDay::Monday => "Monday",
            ClassDay::Tuesday => "Tuesday",
            ClassDay::Wednesday => "Wednesday",
            ClassDay::Thursday => "Thursday",
            ClassDay::Friday => "Friday",
            ClassDay::Saturday => "Saturday",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    FullTime,
    HalfTime,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherStatus {
    #[default]
    Active,
    /// Soft-deleted: kept in the snapshot, excluded from new assignments by
    /// the UI. Existing events are untouched.
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contract: ContractType,
    /// Contract cap on weekly teaching hours; the soft overload check
    /// compares total assigned load against this.
    pub max_weekly_hours: u32,
    /// Subject ids this teacher is qualified to teach.
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub status: TeacherStatus,
}

impl Teacher {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_weekly_hours: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            contract: ContractType::FullTime,
            max_weekly_hours,
            specialties: Vec::new(),
            status: TeacherStatus::Active,
        }
    }
}

/// Kind of teaching room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Lecture,
    Lab,
    Workshop,
    Auditorium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: String,
    pub name: String,
    /// Seats; the sole hard constraint input for this entity.
    pub capacity: u32,
    pub kind: RoomKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl Classroom {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            kind: RoomKind::Lecture,
            description: None,
        }
    }
}

/// A reusable subject template, not tied to a specific offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub total_hours: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, total_hours: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            total_hours,
            description: None,
        }
    }
}

/// A student group: the population whose size must fit assigned rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub semester: String,
    /// Owning program.
    pub career_id: String,
    pub student_count: u32,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>, student_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            semester: String::new(),
            career_id: String::new(),
            student_count,
        }
    }
}

/// One offering of a subject to a group over an inclusive date range.
///
/// The course is the temporal anchor for all its events: their week windows
/// are relative to this course's start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub subject_id: String,
    pub group_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_hours: u32,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        group_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            group_id: group_id.into(),
            start_date,
            end_date,
            total_hours: 0,
        }
    }

    /// Monday-aligned calendar-week span of the offering. Derived from the
    /// dates, never stored, so it survives either date being edited.
    pub fn duration_weeks(&self) -> i64 {
        weeks::calendar_week_span(self.start_date, self.end_date)
    }

    pub fn span(&self) -> DateSpan {
        DateSpan::new(self.start_date, self.end_date)
    }
}

/// One weekday row of a recurring class.
///
/// A single submission spanning N weekdays becomes N rows that share an
/// `assignment_id` and every field except `day`; they are created and
/// deleted as a group, never independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    /// Shared by the sibling rows of one recurring assignment.
    pub assignment_id: String,
    pub course_id: String,
    pub teacher_id: String,
    pub classroom_id: String,
    pub day: ClassDay,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// 1-based, relative to the owning course's Monday-anchored start week.
    pub start_week: u32,
    pub end_week: u32,
}

impl ScheduleEvent {
    pub fn duration_minutes(&self) -> u32 {
        crate::timeslot::duration_minutes(self.start_time, self.end_time)
    }

    pub fn week_window(&self) -> WeekWindow {
        WeekWindow {
            start_week: self.start_week,
            end_week: self.end_week,
        }
    }

    /// The absolute date span this event recurs over, resolved against its
    /// owning course's start date.
    pub fn absolute_window(&self, course: &Course) -> DateSpan {
        weeks::window_to_dates(course.start_date, self.week_window())
    }
}
