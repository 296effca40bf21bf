//! `PostgreSQL` adapter for catalog introspection.

mod catalog;

pub use catalog::PostgresTableCatalog;
