//! Table listing against a real `information_schema`.

use crate::postgres::helpers::{ScratchSchema, SharedDatabase, test_database};
use eyre::{Result, ensure};
use mcpdb::catalog::{
    adapters::postgres::PostgresTableCatalog, domain::SchemaName, services::TableLister,
};
use mcpdb::cli::{RunStatus, check_tables};
use rstest::rstest;

#[rstest]
fn tables_are_listed_alphabetically_regardless_of_creation_order(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = ScratchSchema::create(database)?;
    scratch.execute(concat!(
        "CREATE TABLE gamma (id INT); ",
        "CREATE TABLE alpha (id INT); ",
        "CREATE TABLE beta (id INT);",
    ))?;

    let report = TableLister::new(PostgresTableCatalog::new(database.connect()?))
        .list(&SchemaName::new(scratch.name()))?;

    let names: Vec<&str> = report.tables().iter().map(|table| table.as_str()).collect();
    ensure!(
        names == ["alpha", "beta", "gamma"],
        "unexpected order: {names:?}"
    );
    Ok(())
}

#[rstest]
fn empty_schema_prints_header_only(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = ScratchSchema::create(database)?;
    let catalog = PostgresTableCatalog::new(database.connect()?);
    let mut out = Vec::new();

    let status = check_tables(
        || Ok(catalog),
        &SchemaName::new(scratch.name()),
        &mut out,
    )?;

    ensure!(status == RunStatus::Success, "run should succeed");
    ensure!(String::from_utf8(out)? == "Tables in database:\n", "unexpected output");
    Ok(())
}

#[rstest]
fn tables_of_other_schemas_are_not_listed(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let listed = ScratchSchema::create(database)?;
    let other = ScratchSchema::create(database)?;
    listed.execute("CREATE TABLE tasks (id INT);")?;
    other.execute("CREATE TABLE projects (id INT);")?;
    let catalog = PostgresTableCatalog::new(database.connect()?);
    let mut out = Vec::new();

    check_tables(
        || Ok(catalog),
        &SchemaName::new(listed.name()),
        &mut out,
    )?;

    ensure!(
        String::from_utf8(out)? == "Tables in database:\n  - tasks\n",
        "unexpected output"
    );
    Ok(())
}
