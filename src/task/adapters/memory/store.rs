//! In-memory task store driven by an injectable clock.

use crate::task::{
    domain::{TaskId, TaskRecord, TaskStatus, UpdatedTask},
    ports::{TaskStatusStore, TaskStoreResult},
};
use mockable::Clock;
use std::collections::HashMap;

/// Task store holding records in memory.
///
/// The clock stands in for the database's `NOW()`.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore<C>
where
    C: Clock,
{
    records: HashMap<TaskId, TaskRecord>,
    clock: C,
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            records: HashMap::new(),
            clock,
        }
    }

    /// Inserts or replaces a record.
    pub fn insert(&mut self, record: TaskRecord) {
        self.records.insert(record.id().clone(), record);
    }

    /// Returns the record for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.records.get(id)
    }
}

impl<C> TaskStatusStore for InMemoryTaskStore<C>
where
    C: Clock,
{
    fn update_status(
        &mut self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> TaskStoreResult<Option<UpdatedTask>> {
        let Some(record) = self.records.get_mut(id) else {
            return Ok(None);
        };
        record.apply_status(status.clone(), self.clock.utc());
        Ok(Some(record.to_updated()))
    }
}
