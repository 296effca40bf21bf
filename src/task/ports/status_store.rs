//! Store port for updating a task's status.

use crate::config::ConfigError;
use crate::task::domain::{TaskId, TaskStatus, UpdatedTask};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Write access to task status columns.
pub trait TaskStatusStore {
    /// Sets `status` on the task identified by `id`.
    ///
    /// In the same write, `updated_at` moves to the current time and
    /// `started_at` is set to the current time only when it is unset. The
    /// write is committed before returning.
    ///
    /// Returns `Ok(None)` when no task has the given id; nothing is changed
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the update cannot be
    /// executed or committed. Nothing is committed on error.
    fn update_status(
        &mut self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> TaskStoreResult<Option<UpdatedTask>>;
}

/// Errors returned by task store implementations.
///
/// Every failure is reported with the underlying message only.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The connection settings were rejected before connecting.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Connection, query or commit failure.
    #[error("{0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
