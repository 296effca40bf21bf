//! Run functions behind the `check_tables` and `update_task_status`
//! binaries.
//!
//! Each function performs one operation, writes its report or one-line
//! error message to `out`, and returns the process status. The two
//! operations differ on failure: listing tables always
//! finishes with [`RunStatus::Success`], while a failed status update
//! finishes with [`RunStatus::Failure`]. A task that does not exist is a
//! successful run.

use crate::catalog::{
    adapters::postgres::PostgresTableCatalog,
    domain::SchemaName,
    ports::{CatalogResult, TableCatalog},
    services::TableLister,
};
use crate::config::{CheckTablesArgs, UpdateTaskStatusArgs};
use crate::task::{
    adapters::postgres::PostgresTaskStore,
    ports::{TaskStatusStore, TaskStoreResult},
    services::{StatusUpdateRequest, TaskStatusUpdater},
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::warn;

/// Prefix of the line printed when listing tables fails.
pub const LIST_ERROR_PREFIX: &str = "Error: ";

/// Prefix of the line printed when a status update fails.
pub const UPDATE_ERROR_PREFIX: &str = "Error updating task: ";

/// Process status chosen by a run function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit with status 0.
    Success,
    /// Exit with status 1.
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => Self::SUCCESS,
            RunStatus::Failure => Self::FAILURE,
        }
    }
}

/// Lists tables using the `PostgreSQL` catalog described by `args`.
///
/// # Errors
///
/// Returns an I/O error only when writing to `out` fails.
pub fn run_check_tables(args: &CheckTablesArgs, out: &mut impl Write) -> io::Result<RunStatus> {
    check_tables(
        || PostgresTableCatalog::connect(&args.connection.settings()?),
        &args.schema(),
        out,
    )
}

/// Updates a task status using the `PostgreSQL` store described by `args`.
///
/// # Errors
///
/// Returns an I/O error only when writing to `out` fails.
pub fn run_update_task_status(
    args: &UpdateTaskStatusArgs,
    out: &mut impl Write,
) -> io::Result<RunStatus> {
    update_task_status(
        || PostgresTaskStore::connect(&args.connection.settings()?),
        &args.request(),
        out,
    )
}

/// Opens a catalog with `connect`, lists `schema` and prints the report.
///
/// Any failure is printed as `Error: <message>` and still yields
/// [`RunStatus::Success`]. The catalog is dropped, and its connection
/// closed, before this function returns.
///
/// # Errors
///
/// Returns an I/O error only when writing to `out` fails.
pub fn check_tables<C, F>(
    connect: F,
    schema: &SchemaName,
    out: &mut impl Write,
) -> io::Result<RunStatus>
where
    C: TableCatalog,
    F: FnOnce() -> CatalogResult<C>,
{
    let listed = connect().and_then(|catalog| TableLister::new(catalog).list(schema));
    match listed {
        Ok(report) => write!(out, "{report}")?,
        Err(err) => {
            warn!(error = %err, schema = %schema, "listing tables failed");
            writeln!(out, "{LIST_ERROR_PREFIX}{err}")?;
        }
    }
    Ok(RunStatus::Success)
}

/// Opens a store with `connect`, applies `request` and prints the outcome.
///
/// A missing task prints the not-found line and yields
/// [`RunStatus::Success`]. Any failure is printed as
/// `Error updating task: <message>` and yields [`RunStatus::Failure`]. The
/// store is dropped, and its connection closed, before this function
/// returns.
///
/// # Errors
///
/// Returns an I/O error only when writing to `out` fails.
pub fn update_task_status<S, F>(
    connect: F,
    request: &StatusUpdateRequest,
    out: &mut impl Write,
) -> io::Result<RunStatus>
where
    S: TaskStatusStore,
    F: FnOnce() -> TaskStoreResult<S>,
{
    let applied = connect().and_then(|store| TaskStatusUpdater::new(store).apply(request));
    match applied {
        Ok(outcome) => {
            write!(out, "{outcome}")?;
            Ok(RunStatus::Success)
        }
        Err(err) => {
            warn!(error = %err, task_id = %request.task_id(), "task status update failed");
            writeln!(out, "{UPDATE_ERROR_PREFIX}{err}")?;
            Ok(RunStatus::Failure)
        }
    }
}
