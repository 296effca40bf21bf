//! Status updates against a real `tasks` table.

use crate::postgres::helpers::{
    SeedTask, SharedDatabase, fetch_task, fixed_past, insert_task, scratch_with_tasks,
    server_now, test_database,
};
use chrono::Duration;
use eyre::{Result, bail, ensure, eyre};
use mcpdb::cli::{RunStatus, update_task_status};
use mcpdb::task::{
    adapters::postgres::PostgresTaskStore,
    domain::{TaskId, TaskStatus},
    services::{StatusUpdateOutcome, StatusUpdateRequest, TaskStatusUpdater},
};
use rstest::rstest;
use uuid::Uuid;

fn in_progress_request(id: Uuid) -> StatusUpdateRequest {
    StatusUpdateRequest::new(TaskId::new(id.to_string()), TaskStatus::in_progress())
}

#[rstest]
fn first_update_sets_status_and_stamps_both_timestamps(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = scratch_with_tasks(database)?;
    let mut conn = scratch.connect()?;
    let id = Uuid::new_v4();
    insert_task(
        &mut conn,
        &SeedTask {
            id,
            name: "WebSocket real-time sync",
            status: "pending",
            updated_at: fixed_past()?,
            started_at: None,
        },
    )?;
    let before = server_now(&mut conn)?;

    let outcome = TaskStatusUpdater::new(PostgresTaskStore::new(scratch.connect()?))
        .apply(&in_progress_request(id))?;

    let StatusUpdateOutcome::Updated(updated) = outcome else {
        bail!("task should have been updated");
    };
    ensure!(updated.id().as_str() == id.to_string(), "wrong id returned");
    ensure!(updated.name() == "WebSocket real-time sync", "wrong name returned");
    ensure!(updated.status().as_str() == "in_progress", "wrong status returned");

    let stored = fetch_task(&mut conn, id)?;
    ensure!(stored.status == "in_progress", "status was not written");
    ensure!(stored.updated_at >= before, "updated_at was not advanced");
    let started_at = stored
        .started_at
        .ok_or_else(|| eyre!("started_at should be set"))?;
    ensure!(started_at >= before, "started_at predates the update");
    Ok(())
}

#[rstest]
fn repeated_update_keeps_original_start_time(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = scratch_with_tasks(database)?;
    let mut conn = scratch.connect()?;
    let id = Uuid::new_v4();
    let started = fixed_past()?;
    insert_task(
        &mut conn,
        &SeedTask {
            id,
            name: "MCP integration testing",
            status: "in_progress",
            updated_at: started + Duration::hours(1),
            started_at: Some(started),
        },
    )?;

    TaskStatusUpdater::new(PostgresTaskStore::new(scratch.connect()?))
        .apply(&in_progress_request(id))?;

    let stored = fetch_task(&mut conn, id)?;
    ensure!(stored.started_at == Some(started), "started_at was overwritten");
    ensure!(
        stored.updated_at > started + Duration::hours(1),
        "updated_at did not advance"
    );
    Ok(())
}

#[rstest]
fn unknown_id_reports_not_found_and_leaves_rows_untouched(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = scratch_with_tasks(database)?;
    let mut conn = scratch.connect()?;
    let id = Uuid::new_v4();
    insert_task(
        &mut conn,
        &SeedTask {
            id,
            name: "Analytics dashboard",
            status: "pending",
            updated_at: fixed_past()?,
            started_at: None,
        },
    )?;
    let before = fetch_task(&mut conn, id)?;
    let missing = Uuid::new_v4();
    let store = PostgresTaskStore::new(scratch.connect()?);
    let mut out = Vec::new();

    let status = update_task_status(
        || Ok(store),
        &in_progress_request(missing),
        &mut out,
    )?;

    ensure!(status == RunStatus::Success, "run should succeed");
    ensure!(
        String::from_utf8(out)? == format!("Task with ID {missing} not found\n"),
        "unexpected output"
    );
    ensure!(fetch_task(&mut conn, id)? == before, "existing row changed");
    Ok(())
}

#[rstest]
fn rejected_update_prints_error_fails_and_commits_nothing(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = scratch_with_tasks(database)?;
    let mut conn = scratch.connect()?;
    let id = Uuid::new_v4();
    insert_task(
        &mut conn,
        &SeedTask {
            id,
            name: "Bulk operations",
            status: "pending",
            updated_at: fixed_past()?,
            started_at: None,
        },
    )?;
    let before = fetch_task(&mut conn, id)?;
    let too_long = TaskStatus::new("x".repeat(80));
    let store = PostgresTaskStore::new(scratch.connect()?);
    let mut out = Vec::new();

    let status = update_task_status(
        || Ok(store),
        &StatusUpdateRequest::new(TaskId::new(id.to_string()), too_long),
        &mut out,
    )?;

    ensure!(status == RunStatus::Failure, "run should fail");
    let printed = String::from_utf8(out)?;
    ensure!(
        printed.starts_with("Error updating task: ")
            && printed.len() > "Error updating task: \n".len(),
        "unexpected output: {printed}"
    );
    ensure!(fetch_task(&mut conn, id)? == before, "failed update changed the row");
    Ok(())
}

#[rstest]
fn malformed_id_is_rejected_by_the_database(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = scratch_with_tasks(database)?;
    let mut conn = scratch.connect()?;
    let id = Uuid::new_v4();
    insert_task(
        &mut conn,
        &SeedTask {
            id,
            name: "Search indexing",
            status: "pending",
            updated_at: fixed_past()?,
            started_at: None,
        },
    )?;
    let before = fetch_task(&mut conn, id)?;
    let store = PostgresTaskStore::new(scratch.connect()?);
    let mut out = Vec::new();

    let status = update_task_status(
        || Ok(store),
        &StatusUpdateRequest::new(TaskId::new("not-a-uuid"), TaskStatus::in_progress()),
        &mut out,
    )?;

    ensure!(status == RunStatus::Failure, "run should fail");
    let printed = String::from_utf8(out)?;
    ensure!(
        printed.starts_with("Error updating task: ") && printed.contains("uuid"),
        "unexpected output: {printed}"
    );
    ensure!(fetch_task(&mut conn, id)? == before, "failed update changed the row");
    Ok(())
}

#[rstest]
fn uppercase_id_matches_the_stored_uuid(
    #[from(test_database)] database: SharedDatabase,
) -> Result<()> {
    let scratch = scratch_with_tasks(database)?;
    let mut conn = scratch.connect()?;
    let id = Uuid::new_v4();
    insert_task(
        &mut conn,
        &SeedTask {
            id,
            name: "Audit trail",
            status: "pending",
            updated_at: fixed_past()?,
            started_at: None,
        },
    )?;
    let request = StatusUpdateRequest::new(
        TaskId::new(id.to_string().to_uppercase()),
        TaskStatus::in_progress(),
    );

    let outcome = TaskStatusUpdater::new(PostgresTaskStore::new(scratch.connect()?))
        .apply(&request)?;

    let StatusUpdateOutcome::Updated(updated) = outcome else {
        bail!("uppercase id should match the stored row");
    };
    ensure!(updated.id().as_str() == id.to_string(), "id should be canonical");
    ensure!(
        fetch_task(&mut conn, id)?.status == "in_progress",
        "status was not written"
    );
    Ok(())
}
