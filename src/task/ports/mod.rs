//! Port contracts for task status maintenance.

pub mod status_store;

pub use status_store::{TaskStatusStore, TaskStoreError, TaskStoreResult};
