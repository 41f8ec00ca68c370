//! Service orchestration tests over the in-memory repository.

use std::sync::Arc;
use std::time::Duration;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_service_shares_the_underlying_repository(service: TestService) {
    let cloned = service.clone();
    cloned
        .create_task(CreateTaskRequest::new("Visible to both handles"))
        .await
        .expect("task creation should succeed");

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_defaults_to_pending_and_empty_description(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Water the plants"))
        .await
        .expect("task creation should succeed");

    assert_eq!(created.title().as_str(), "Water the plants");
    assert_eq!(created.description(), "");
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.created_at(), created.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_blank_title_and_persists_nothing(service: TestService) {
    let result = service.create_task(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_returns_newest_first(service: TestService) {
    for title in ["first", "second", "third"] {
        service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("task creation should succeed");
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let tasks = service.list_tasks().await.expect("listing should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_fails_for_missing_id(service: TestService) {
    let missing = TaskId::new();
    let result = service.get_task(missing).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(id)
        )) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_merges_partial_fields_and_refreshes_timestamp(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Review patch").with_description("round one"))
        .await
        .expect("task creation should succeed");

    tokio::time::sleep(Duration::from_millis(2)).await;
    let updated = service
        .update_task(
            created.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Completed),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title().as_str(), "Review patch");
    assert_eq!(updated.description(), "round one");
    assert_eq!(updated.status(), TaskStatus::Completed);
    assert!(updated.updated_at() > created.updated_at());

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_rejects_blank_replacement_title(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Keep me named"))
        .await
        .expect("task creation should succeed");

    let result = service
        .update_task(created.id(), UpdateTaskRequest::new().with_title("  "))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.title().as_str(), "Keep me named");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_fails_for_missing_id(service: TestService) {
    let result = service
        .update_task(
            TaskId::new(),
            UpdateTaskRequest::new().with_status(TaskStatus::Completed),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_makes_subsequent_get_fail(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Ephemeral"))
        .await
        .expect("task creation should succeed");

    service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");

    let result = service.get_task(created.id()).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_fails_for_missing_id(service: TestService) {
    let result = service.delete_task(TaskId::new()).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}
