//! Identifier and status values for the task domain.

use std::fmt;

/// Identifier of an externally owned task record.
///
/// The value is opaque, typically a UUID rendered as text. No format
/// validation is applied; an id the database cannot match simply finds no
/// row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status value written to a task, such as `in_progress`.
///
/// Free-form: the database schema is the only gate on accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskStatus(String);

impl TaskStatus {
    /// Status written when work on a task begins.
    pub const IN_PROGRESS: &str = "in_progress";

    /// Creates a status value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the `in_progress` status.
    #[must_use]
    pub fn in_progress() -> Self {
        Self::new(Self::IN_PROGRESS)
    }

    /// Returns the status as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::in_progress()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
