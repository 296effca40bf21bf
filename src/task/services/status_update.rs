//! Service layer for setting a task's status.

use crate::task::{
    domain::{TaskId, TaskStatus, UpdatedTask},
    ports::{TaskStatusStore, TaskStoreResult},
};
use std::fmt;
use tracing::info;

/// Request to set the status of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdateRequest {
    task_id: TaskId,
    status: TaskStatus,
}

impl StatusUpdateRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(task_id: TaskId, status: TaskStatus) -> Self {
        Self { task_id, status }
    }

    /// Returns the targeted task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the status to write.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }
}

/// Terminal outcome of a status update that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdateOutcome {
    /// A row matched and the update was committed.
    Updated(UpdatedTask),
    /// No row has the requested id; nothing changed.
    NotFound(TaskId),
}

impl StatusUpdateOutcome {
    /// Returns the updated projection, if a row matched.
    #[must_use]
    pub const fn updated(&self) -> Option<&UpdatedTask> {
        match self {
            Self::Updated(task) => Some(task),
            Self::NotFound(_) => None,
        }
    }
}

impl fmt::Display for StatusUpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated(task) => {
                writeln!(f, "Successfully updated task:")?;
                writeln!(f, "  ID: {}", task.id())?;
                writeln!(f, "  Name: {}", task.name())?;
                writeln!(f, "  Status: {}", task.status())
            }
            Self::NotFound(id) => writeln!(f, "Task with ID {id} not found"),
        }
    }
}

/// Applies status updates through a [`TaskStatusStore`].
pub struct TaskStatusUpdater<S>
where
    S: TaskStatusStore,
{
    store: S,
}

impl<S> TaskStatusUpdater<S>
where
    S: TaskStatusStore,
{
    /// Creates an updater that owns `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Sets the requested status.
    ///
    /// A missing task is reported as [`StatusUpdateOutcome::NotFound`], not
    /// as an error.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`TaskStoreError`](crate::task::ports::TaskStoreError).
    pub fn apply(&mut self, request: &StatusUpdateRequest) -> TaskStoreResult<StatusUpdateOutcome> {
        let updated = self
            .store
            .update_status(request.task_id(), request.status())?;

        Ok(match updated {
            Some(task) => {
                info!(task_id = %task.id(), status = %task.status(), "task status updated");
                StatusUpdateOutcome::Updated(task)
            }
            None => {
                info!(task_id = %request.task_id(), "task not found");
                StatusUpdateOutcome::NotFound(request.task_id().clone())
            }
        })
    }
}
