//! `PostgreSQL` implementation of the task status store.

use super::models::{ColumnTypeRow, UpdatedTaskRow};
use crate::config::ConnectionSettings;
use crate::connection;
use crate::task::{
    domain::{TaskId, TaskStatus, UpdatedTask},
    ports::{TaskStatusStore, TaskStoreError, TaskStoreResult},
};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use tracing::{debug, info};

// Type modifiers are dropped so a `varchar(n)` cast cannot truncate input.
const COLUMN_TYPES_SQL: &str = concat!(
    "SELECT a.attname::text AS column_name, ",
    "format_type(a.atttypid, NULL) AS column_type ",
    "FROM pg_attribute a ",
    "WHERE a.attrelid = to_regclass('tasks') ",
    "AND a.attname IN ('id', 'status') ",
    "AND a.attnum > 0 AND NOT a.attisdropped",
);

/// Builds the update with both parameters cast to their column types.
///
/// The database parses the id and status as it would an untyped literal, so
/// a malformed UUID is rejected while an uppercase one still matches the
/// primary key. Columns the catalog does not report fall back to `text`,
/// leaving the error to the `UPDATE` itself.
fn update_status_sql(columns: &[ColumnTypeRow]) -> String {
    format!(
        concat!(
            "UPDATE tasks ",
            "SET status = CAST($1 AS {status_type}), updated_at = NOW(), ",
            "started_at = COALESCE(started_at, NOW()) ",
            "WHERE id = CAST($2 AS {id_type}) ",
            "RETURNING id::text AS id, name::text AS name, status::text AS status",
        ),
        status_type = column_type(columns, "status"),
        id_type = column_type(columns, "id"),
    )
}

fn column_type<'a>(columns: &'a [ColumnTypeRow], column: &str) -> &'a str {
    columns
        .iter()
        .find(|row| row.column_name == column)
        .map_or("text", |row| row.column_type.as_str())
}

/// Task store backed by one owned `PostgreSQL` connection.
///
/// Dropping the store closes the connection.
pub struct PostgresTaskStore {
    connection: PgConnection,
}

impl PostgresTaskStore {
    /// Wraps an already established connection.
    #[must_use]
    pub const fn new(connection: PgConnection) -> Self {
        Self { connection }
    }

    /// Opens a connection for `settings` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the connection cannot be
    /// established.
    pub fn connect(settings: &ConnectionSettings) -> TaskStoreResult<Self> {
        let established =
            connection::establish(settings).map_err(TaskStoreError::persistence)?;
        Ok(Self::new(established))
    }
}

impl TaskStatusStore for PostgresTaskStore {
    fn update_status(
        &mut self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> TaskStoreResult<Option<UpdatedTask>> {
        debug!(task_id = %id, status = %status, "updating task status");
        // Commits when the closure returns `Ok`, rolls back otherwise.
        let row = self
            .connection
            .transaction::<_, DieselError, _>(|conn| {
                let columns = diesel::sql_query(COLUMN_TYPES_SQL).load::<ColumnTypeRow>(conn)?;
                diesel::sql_query(update_status_sql(&columns))
                    .bind::<diesel::sql_types::Text, _>(status.as_str())
                    .bind::<diesel::sql_types::Text, _>(id.as_str())
                    .get_result::<UpdatedTaskRow>(conn)
                    .optional()
            })
            .map_err(TaskStoreError::persistence)?;

        match &row {
            Some(_) => info!(task_id = %id, status = %status, "committed task status update"),
            None => debug!(task_id = %id, "no task matched the update"),
        }
        Ok(row.map(row_to_updated))
    }
}

fn row_to_updated(row: UpdatedTaskRow) -> UpdatedTask {
    let UpdatedTaskRow { id, name, status } = row;
    UpdatedTask::new(TaskId::new(id), name, TaskStatus::new(status))
}
