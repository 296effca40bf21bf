//! mcpdb: maintenance tools for the MCP learning `PostgreSQL` database.
//!
//! The crate backs two small binaries:
//!
//! - `check_tables` prints the tables of a schema, alphabetically.
//! - `update_task_status` sets one task's status, stamping `updated_at`
//!   and, the first time only, `started_at`.
//!
//! # Architecture
//!
//! Each operation follows hexagonal architecture principles:
//!
//! - **Domain**: value types with no infrastructure dependencies
//! - **Ports**: traits the operation talks to
//! - **Adapters**: a Diesel `PostgreSQL` implementation and an in-memory one
//! - **Services**: the operation and the report it prints
//!
//! Both operations are synchronous and own exactly one connection, which is
//! closed when the adapter holding it is dropped.
//!
//! # Modules
//!
//! - [`catalog`]: schema table listing
//! - [`task`]: task status updates
//! - [`cli`]: run functions used by the binaries
//! - [`config`]: connection settings and flags
//! - [`connection`]: connection establishment
//! - [`telemetry`]: logging setup

pub mod catalog;
pub mod cli;
pub mod config;
pub mod connection;
pub mod task;
pub mod telemetry;
