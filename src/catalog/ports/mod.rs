//! Port contracts for catalog introspection.

pub mod table_catalog;

pub use table_catalog::{CatalogError, CatalogResult, TableCatalog};
