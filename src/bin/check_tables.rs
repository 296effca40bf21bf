//! Prints the tables of a schema in the MCP learning database.
//!
//! Usage:
//!
//! ```text
//! check_tables [--host HOST] [--port PORT] [--database NAME] [--user USER]
//!              [--password PASSWORD] [--schema SCHEMA]
//! ```
//!
//! Connection flags fall back to `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER`
//! and `PGPASSWORD`; the schema falls back to `MCPDB_SCHEMA` and then
//! `public`. A database failure is printed as `Error: <message>` and the
//! process still exits with status 0.

use clap::Parser;
use mcpdb::cli::run_check_tables;
use mcpdb::config::CheckTablesArgs;
use mcpdb::telemetry;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if telemetry::install(&mut io::stderr()).is_err() {
        return ExitCode::FAILURE;
    }
    let args = CheckTablesArgs::parse();
    let mut out = io::stdout().lock();
    run_check_tables(&args, &mut out).map_or(ExitCode::FAILURE, ExitCode::from)
}
