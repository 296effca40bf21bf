//! Catalog port listing the tables of a schema.

use crate::catalog::domain::{SchemaName, TableName};
use crate::config::ConfigError;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only access to a database catalog.
pub trait TableCatalog {
    /// Returns every table in `schema`, ordered by name.
    ///
    /// An empty schema yields an empty vector rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] when the catalog cannot be
    /// queried.
    fn list_tables(&mut self, schema: &SchemaName) -> CatalogResult<Vec<TableName>>;
}

/// Errors returned while listing tables.
///
/// Every failure is reported with the underlying message only; callers do
/// not distinguish connection, authentication and query failures.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The connection settings were rejected before connecting.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Connection or query failure.
    #[error("{0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
