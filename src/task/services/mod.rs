//! Application services for task status maintenance.

mod status_update;

pub use status_update::{StatusUpdateOutcome, StatusUpdateRequest, TaskStatusUpdater};
