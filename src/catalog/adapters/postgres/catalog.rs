//! `information_schema` backed table listing.

use crate::catalog::{
    domain::{SchemaName, TableName},
    ports::{CatalogError, CatalogResult, TableCatalog},
};
use crate::config::ConnectionSettings;
use crate::connection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::debug;

const LIST_TABLES_SQL: &str = concat!(
    "SELECT table_name::text AS table_name ",
    "FROM information_schema.tables ",
    "WHERE table_schema = $1 ",
    "ORDER BY table_name",
);

#[derive(Debug, QueryableByName)]
struct TableNameRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    table_name: String,
}

/// Catalog backed by one owned `PostgreSQL` connection.
///
/// Dropping the catalog closes the connection.
pub struct PostgresTableCatalog {
    connection: PgConnection,
}

impl PostgresTableCatalog {
    /// Wraps an already established connection.
    #[must_use]
    pub const fn new(connection: PgConnection) -> Self {
        Self { connection }
    }

    /// Opens a connection for `settings` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] when the connection cannot be
    /// established.
    pub fn connect(settings: &ConnectionSettings) -> CatalogResult<Self> {
        let established = connection::establish(settings).map_err(CatalogError::persistence)?;
        Ok(Self::new(established))
    }
}

impl TableCatalog for PostgresTableCatalog {
    fn list_tables(&mut self, schema: &SchemaName) -> CatalogResult<Vec<TableName>> {
        let rows = diesel::sql_query(LIST_TABLES_SQL)
            .bind::<diesel::sql_types::Text, _>(schema.as_str())
            .load::<TableNameRow>(&mut self.connection)
            .map_err(CatalogError::persistence)?;
        debug!(schema = %schema, count = rows.len(), "listed catalog tables");

        Ok(rows
            .into_iter()
            .map(|row| TableName::new(row.table_name))
            .collect())
    }
}
