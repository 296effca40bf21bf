//! In-memory catalog keyed by schema.

use crate::catalog::{
    domain::{SchemaName, TableName},
    ports::{CatalogResult, TableCatalog},
};
use std::collections::{BTreeSet, HashMap};

/// Catalog holding table names per schema in memory.
///
/// Names are kept sorted, matching the `ORDER BY table_name` of the
/// `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableCatalog {
    schemas: HashMap<SchemaName, BTreeSet<TableName>>,
}

impl InMemoryTableCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table in `schema`.
    #[must_use]
    pub fn with_table(mut self, schema: &SchemaName, table: impl Into<String>) -> Self {
        self.add_table(schema, table);
        self
    }

    /// Registers a table in `schema`. Registering the same name twice is a
    /// no-op.
    pub fn add_table(&mut self, schema: &SchemaName, table: impl Into<String>) {
        self.schemas
            .entry(schema.clone())
            .or_default()
            .insert(TableName::new(table));
    }
}

impl TableCatalog for InMemoryTableCatalog {
    fn list_tables(&mut self, schema: &SchemaName) -> CatalogResult<Vec<TableName>> {
        Ok(self
            .schemas
            .get(schema)
            .map(|tables| tables.iter().cloned().collect())
            .unwrap_or_default())
    }
}
