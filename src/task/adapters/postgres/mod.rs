//! `PostgreSQL` adapter for task status maintenance.

mod models;
mod store;

pub use store::PostgresTaskStore;
