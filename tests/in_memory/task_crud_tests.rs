//! In-memory integration tests for the task resource lifecycle.

use std::sync::Arc;
use std::time::Duration;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Asserts the listed titles match the expected order exactly.
///
/// # Errors
///
/// Returns an error when the count or the order differs.
fn assert_titles_in_order(tasks: &[Task], expected: &[&str]) -> Result<(), eyre::Report> {
    let titles: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    eyre::ensure!(
        titles == expected,
        "expected titles {expected:?}, found {titles:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_defaults_and_is_retrievable(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Pay invoices").with_description("Q3 batch"))
        .await
        .expect("task creation should succeed");

    assert_eq!(created.status(), TaskStatus::Pending);

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_after_n_creates_returns_all_newest_first(
    service: TestService,
) -> Result<(), eyre::Report> {
    for title in ["one", "two", "three", "four"] {
        service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("task creation should succeed");
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let tasks = service.list_tasks().await.expect("listing should succeed");
    eyre::ensure!(tasks.len() == 4, "expected 4 tasks, found {}", tasks.len());
    assert_titles_in_order(&tasks, &["four", "three", "two", "one"])?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_update_round_trips_with_refreshed_timestamp(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Toggle me"))
        .await
        .expect("task creation should succeed");

    tokio::time::sleep(Duration::from_millis(2)).await;
    service
        .update_task(
            created.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Completed),
        )
        .await
        .expect("update should succeed");

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.status(), TaskStatus::Completed);
    assert!(fetched.updated_at() > created.updated_at());
    assert_eq!(fetched.created_at(), created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_missing_id_all_report_not_found(service: TestService) {
    let missing = TaskId::new();

    let get_result = service.get_task(missing).await;
    let update_result = service
        .update_task(missing, UpdateTaskRequest::new().with_title("renamed"))
        .await;
    let delete_result = service.delete_task(missing).await;

    for result in [
        get_result.map(|_| ()),
        update_result.map(|_| ()),
        delete_result,
    ] {
        assert!(matches!(
            result,
            Err(TaskLifecycleError::Repository(
                TaskRepositoryError::NotFound(id)
            )) if id == missing
        ));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_no_longer_lists(service: TestService) {
    let keeper = service
        .create_task(CreateTaskRequest::new("keeper"))
        .await
        .expect("task creation should succeed");
    let goner = service
        .create_task(CreateTaskRequest::new("goner"))
        .await
        .expect("task creation should succeed");

    service
        .delete_task(goner.id())
        .await
        .expect("delete should succeed");

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(Task::id), Some(keeper.id()));
}
