//! Task record view and the projection returned by a status update.

use super::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};

/// The columns of a task row touched by a status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    id: TaskId,
    name: String,
    status: TaskStatus,
    updated_at: Option<DateTime<Utc>>,
    started_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Creates a record with both timestamps unset.
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            updated_at: None,
            started_at: None,
        }
    }

    /// Sets the last update timestamp.
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Sets the start timestamp.
    #[must_use]
    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the last update timestamp, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns the start timestamp, if any.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Writes `status` and stamps the record at `now`.
    ///
    /// `updated_at` always moves to `now`. `started_at` is first-write-wins:
    /// it is set only while unset and never overwritten afterwards.
    pub fn apply_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = Some(now);
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Returns the id, name and status projection of this record.
    #[must_use]
    pub fn to_updated(&self) -> UpdatedTask {
        UpdatedTask::new(self.id.clone(), self.name.clone(), self.status.clone())
    }
}

/// Post-update view of a task row: its id, name and new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedTask {
    id: TaskId,
    name: String,
    status: TaskStatus,
}

impl UpdatedTask {
    /// Creates the projection.
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the status now stored.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }
}
