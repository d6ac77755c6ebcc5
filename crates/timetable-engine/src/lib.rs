//! # timetable-engine
//!
//! Constraint-based validation for recurring weekly class assignments.
//!
//! Given a proposed recurring class — teacher, room, student group, weekday
//! set, time range, and a multi-week validity window — the engine decides
//! whether the assignment is legal against hard constraints (teacher, room,
//! and group double-booking; room capacity; course date overlap) and flags
//! soft-constraint violations (teacher weekly-hour overload). Validation is
//! a pure function over immutable snapshots of the entity collections;
//! persistence sits behind a narrow batch-write seam.
//!
//! ## Modules
//!
//! - [`model`] — teachers, classrooms, subjects, groups, courses, events
//! - [`timeslot`] — wall-clock times and half-open range overlap
//! - [`weeks`] — relative week windows ↔ absolute calendar dates
//! - [`conflict`] — hard-constraint detection and the soft overload check
//! - [`course`] — course-level date-range overlap guard
//! - [`writer`] — expand a submission into per-weekday rows plus deletions
//! - [`store`] — snapshot type, store trait, in-memory store
//! - [`availability`] — free-slot queries for a teacher or room
//! - [`explain`] — advisory snapshot for the AI explanation collaborator
//! - [`error`] — error types

pub mod availability;
pub mod conflict;
pub mod course;
pub mod error;
pub mod explain;
pub mod model;
pub mod store;
pub mod timeslot;
pub mod weeks;
pub mod writer;

pub use conflict::{check_assignment, CandidateAssignment, Conflict, OverloadWarning};
pub use course::check_course;
pub use error::{Result, ScheduleError};
pub use model::{
    ClassDay, Classroom, ContractType, Course, Group, RoomKind, ScheduleEvent, Subject, Teacher,
    TeacherStatus,
};
pub use store::{MemoryStore, ScheduleData, ScheduleStore};
pub use timeslot::TimeOfDay;
pub use weeks::{DateSpan, WeekWindow};
pub use writer::{plan_assignment, AssignmentRequest, WriteBatch};
