//! Snapshot data and the persistence collaborator seam.
//!
//! The engine never talks to a query language: it needs full-collection
//! reads and atomic batch writes, nothing else. [`ScheduleData`] is the
//! owned snapshot every validator reads; [`ScheduleStore`] is the seam a
//! real backend implements; [`MemoryStore`] is the in-process
//! implementation used by the CLI and tests.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::conflict::OverloadWarning;
use crate::course;
use crate::error::{Result, ScheduleError};
use crate::model::{Classroom, Course, Group, ScheduleEvent, Subject, Teacher};
use crate::writer::{self, AssignmentRequest, WriteBatch};

/// An owned, consistent snapshot of every collection the validators read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

impl ScheduleData {
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn classroom(&self, id: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.id == id)
    }
}

/// Persistence collaborator: full-collection reads and atomic batch writes.
///
/// Implementations own their consistency story. [`MemoryStore`] serializes
/// validate-and-write under one lock; a remote store that cannot do so
/// re-validates on every write and accepts the narrow race between its
/// snapshot read and the batch commit.
pub trait ScheduleStore {
    /// A consistent read of all collections.
    fn snapshot(&self) -> Result<ScheduleData>;

    /// Apply all deletions and creations together, or none of them.
    ///
    /// A refusal (permissions, connectivity) surfaces as
    /// [`ScheduleError::Storage`] — never as a conflict, since the batch
    /// already passed validation.
    fn apply(&self, batch: &WriteBatch) -> Result<()>;
}

/// In-memory store over a [`Mutex`].
///
/// The `submit_*` methods hold the lock across validate + apply, so two
/// in-process writers cannot both validate against a stale snapshot and
/// double-book a resource.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<ScheduleData>,
}

impl MemoryStore {
    pub fn new(data: ScheduleData) -> Self {
        Self {
            inner: Mutex::new(data),
        }
    }

    /// Validate and persist one assignment submission atomically.
    ///
    /// Returns the soft overload warning, if any; the write has already
    /// happened when a warning comes back.
    pub fn submit_assignment(&self, req: &AssignmentRequest) -> Result<Option<OverloadWarning>> {
        let mut data = self.lock()?;
        let (batch, warning) = writer::plan_assignment(&data, req)?;
        apply_batch(&mut data, &batch)?;
        Ok(warning)
    }

    /// Validate and persist a new or edited course atomically.
    ///
    /// An existing course with the same id is replaced in place.
    pub fn submit_course(&self, candidate: Course) -> Result<()> {
        let mut data = self.lock()?;
        course::check_course(&data, &candidate)?;
        match data.courses.iter_mut().find(|c| c.id == candidate.id) {
            Some(slot) => *slot = candidate,
            None => data.courses.push(candidate),
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ScheduleData>> {
        self.inner
            .lock()
            .map_err(|_| ScheduleError::Storage("store lock poisoned".to_string()))
    }
}

impl ScheduleStore for MemoryStore {
    fn snapshot(&self) -> Result<ScheduleData> {
        Ok(self.lock()?.clone())
    }

    fn apply(&self, batch: &WriteBatch) -> Result<()> {
        let mut data = self.lock()?;
        apply_batch(&mut data, batch)
    }
}

/// All-or-nothing batch application: every deletion target is verified
/// before anything mutates.
fn apply_batch(data: &mut ScheduleData, batch: &WriteBatch) -> Result<()> {
    for id in &batch.deletes {
        if data.event(id).is_none() {
            return Err(ScheduleError::Storage(format!(
                "cannot delete unknown event '{id}'"
            )));
        }
    }
    data.events.retain(|e| !batch.deletes.contains(&e.id));
    data.events.extend(batch.creates.iter().cloned());
    Ok(())
}
