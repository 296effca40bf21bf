//! Sets the status of one task in the MCP learning database.
//!
//! Usage:
//!
//! ```text
//! update_task_status --task-id ID [--status STATUS] [--host HOST]
//!                    [--port PORT] [--database NAME] [--user USER]
//!                    [--password PASSWORD]
//! ```
//!
//! The task id falls back to `MCPDB_TASK_ID` and the status to
//! `MCPDB_TASK_STATUS`, then `in_progress`. Connection flags fall back to
//! the standard libpq variables. A missing task is reported and exits with
//! status 0; a database failure is printed as
//! `Error updating task: <message>` and exits with status 1.

use clap::Parser;
use mcpdb::cli::run_update_task_status;
use mcpdb::config::UpdateTaskStatusArgs;
use mcpdb::telemetry;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if telemetry::install(&mut io::stderr()).is_err() {
        return ExitCode::FAILURE;
    }
    let args = UpdateTaskStatusArgs::parse();
    let mut out = io::stdout().lock();
    run_update_task_status(&args, &mut out).map_or(ExitCode::FAILURE, ExitCode::from)
}
