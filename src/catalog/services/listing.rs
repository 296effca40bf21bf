//! Table listing service and its printable report.

use crate::catalog::{
    domain::{SchemaName, TableName},
    ports::{CatalogResult, TableCatalog},
};
use std::fmt;
use tracing::info;

/// Header line printed before the table names.
pub const REPORT_HEADER: &str = "Tables in database:";

/// Marker printed before each table name.
pub const TABLE_MARKER: &str = "  - ";

/// Tables found in one schema, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    schema: SchemaName,
    tables: Vec<TableName>,
}

impl TableReport {
    /// Creates a report for `schema`.
    #[must_use]
    pub const fn new(schema: SchemaName, tables: Vec<TableName>) -> Self {
        Self { schema, tables }
    }

    /// Returns the listed schema.
    #[must_use]
    pub const fn schema(&self) -> &SchemaName {
        &self.schema
    }

    /// Returns the table names in catalog order.
    #[must_use]
    pub fn tables(&self) -> &[TableName] {
        &self.tables
    }

    /// Returns `true` when the schema has no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Renders the header followed by one marked line per table. Each line,
/// including the last, ends with a newline.
impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for table in &self.tables {
            writeln!(f, "{TABLE_MARKER}{table}")?;
        }
        Ok(())
    }
}

/// Lists the tables of a schema through a [`TableCatalog`].
pub struct TableLister<C>
where
    C: TableCatalog,
{
    catalog: C,
}

impl<C> TableLister<C>
where
    C: TableCatalog,
{
    /// Creates a lister that owns `catalog`.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Lists every table in `schema`.
    ///
    /// # Errors
    ///
    /// Propagates the catalog's [`CatalogError`](crate::catalog::ports::CatalogError).
    pub fn list(&mut self, schema: &SchemaName) -> CatalogResult<TableReport> {
        let tables = self.catalog.list_tables(schema)?;
        info!(schema = %schema, count = tables.len(), "listed tables");
        Ok(TableReport::new(schema.clone(), tables))
    }
}
