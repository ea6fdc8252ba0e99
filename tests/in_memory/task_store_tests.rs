//! In-memory integration tests for the task store contract.

use super::helpers::{StoreHarness, harness, new_task};
use rstest::rstest;
use taskhub::storage::KeyValueStore;
use taskhub::task::{
    domain::{Task, TaskCategory, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_reflects_the_new_task(harness: StoreHarness) -> Result<(), eyre::Report> {
    let created = harness.store.create_task(new_task("Buy milk")?).await?;
    let listed = harness.store.list_tasks().await;

    eyre::ensure!(listed == vec![created], "listing should contain exactly the new task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_stay_unique_across_rapid_creates(harness: StoreHarness) -> Result<(), eyre::Report> {
    for index in 0..25 {
        harness
            .store
            .create_task(new_task(&format!("Task {index}"))?)
            .await?;
    }
    let listed = harness.store.list_tasks().await;
    let mut ids: Vec<&TaskId> = listed.iter().map(Task::id).collect();
    ids.sort();
    ids.dedup();

    eyre::ensure!(ids.len() == 25, "expected 25 distinct ids, found {}", ids.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_value_is_a_json_array_after_every_write(
    harness: StoreHarness,
) -> Result<(), eyre::Report> {
    let first = harness.store.create_task(new_task("One")?).await?;
    harness
        .store
        .update_task(first.id(), TaskPatch::new().with_category(TaskCategory::Urgent))
        .await?;
    harness.store.create_task(new_task("Two")?).await?;
    harness.store.delete_task(first.id()).await?;

    let raw = harness
        .backend
        .get("tasks")?
        .ok_or_else(|| eyre::eyre!("tasks key should be written"))?;
    let stored: Vec<Task> = serde_json::from_str(&raw)?;
    let titles: Vec<&str> = stored.iter().map(Task::title).collect();
    eyre::ensure!(titles == ["Two"], "unexpected stored titles {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_is_observable(harness: StoreHarness) -> Result<(), eyre::Report> {
    harness.store.create_task(new_task("Existing")?).await?;
    let before = harness.backend.get("tasks")?;

    let result = harness
        .store
        .update_task(&TaskId::new("0"), TaskPatch::completion(true))
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskStoreError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    eyre::ensure!(
        harness.backend.get("tasks")? == before,
        "failed update must not touch storage"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_written_by_older_clients_are_readable(
    harness: StoreHarness,
) -> Result<(), eyre::Report> {
    harness.backend.set(
        "tasks",
        r#"[{"id":"1700000000000","title":"Legacy","description":"","completed":true,"createdAt":"2023-11-14T22:13:20.000Z"}]"#,
    )?;

    let listed = harness.store.list_tasks().await;
    let legacy = listed
        .first()
        .ok_or_else(|| eyre::eyre!("legacy task should be listed"))?;
    eyre::ensure!(legacy.category() == TaskCategory::General, "category defaults");
    eyre::ensure!(legacy.is_completed(), "completion is preserved");
    eyre::ensure!(legacy.due_date().is_none(), "due date defaults to none");
    Ok(())
}
