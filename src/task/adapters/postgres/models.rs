//! Diesel row models for task status updates.

use diesel::prelude::*;

/// Row returned by the status update's `RETURNING` clause.
///
/// Every column is cast to text in SQL, so the id decodes the same way
/// whether the column is `uuid`, `varchar` or `text`. A `uuid` id comes
/// back in its lowercase canonical form.
#[derive(Debug, Clone, QueryableByName)]
pub struct UpdatedTaskRow {
    /// Task identifier rendered as text.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub id: String,
    /// Task name.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    /// Status after the update.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub status: String,
}

/// Declared type of one `tasks` column, as reported by `pg_attribute`.
#[derive(Debug, Clone, QueryableByName)]
pub struct ColumnTypeRow {
    /// Column name.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub column_name: String,
    /// Type name from `format_type`, quoted where `PostgreSQL` requires it.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub column_type: String,
}
