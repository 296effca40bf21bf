//! Domain model for task status maintenance.
//!
//! Only the columns the status update touches are modelled: the id, name,
//! status and the two lifecycle timestamps.

mod ids;
mod task;

pub use ids::{TaskId, TaskStatus};
pub use task::{TaskRecord, UpdatedTask};
