//! CRUD round-trip tests for the `PostgreSQL` task repository.

use std::env;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Task, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

/// Builds a repository against `TEST_DATABASE_URL`, or `None` to skip.
async fn repository() -> Option<PostgresTaskRepository> {
    let database_url = env::var("TEST_DATABASE_URL").ok()?;
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("test pool should build");
    let repository = PostgresTaskRepository::new(pool);
    repository
        .ensure_schema()
        .await
        .expect("schema setup should succeed");
    Some(repository)
}

fn sample_task(title: &str) -> Task {
    let title = TaskTitle::new(title).expect("valid title");
    Task::new(title, String::new(), TaskStatus::Pending, &DefaultClock)
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_find_update_delete_round_trip() {
    let Some(repository) = repository().await else {
        return;
    };

    let mut task = sample_task("pg round trip");
    repository.insert(&task).await.expect("insert should succeed");

    // Timestamps are compared per-field: Postgres stores microseconds while
    // the clock produces nanoseconds.
    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.id(), task.id());
    assert_eq!(fetched.title(), task.title());
    assert_eq!(fetched.status(), task.status());

    task.apply_patch(
        TaskPatch {
            title: None,
            description: Some("now with notes".to_owned()),
            status: Some(TaskStatus::Completed),
        },
        &DefaultClock,
    );
    repository.update(&task).await.expect("update should succeed");

    let updated = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.description(), "now with notes");

    repository
        .delete(task.id())
        .await
        .expect("delete should succeed");
    let gone = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert!(gone.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_insert_is_rejected() {
    let Some(repository) = repository().await else {
        return;
    };

    let task = sample_task("pg duplicate");
    repository.insert(&task).await.expect("insert should succeed");

    let duplicate = repository.insert(&task).await;
    assert!(matches!(
        duplicate,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));

    repository
        .delete(task.id())
        .await
        .expect("cleanup should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_report_not_found_for_missing_id() {
    let Some(repository) = repository().await else {
        return;
    };

    let phantom = sample_task("pg phantom");
    let update_result = repository.update(&phantom).await;
    assert!(matches!(
        update_result,
        Err(TaskRepositoryError::NotFound(_))
    ));

    let delete_result = repository.delete(TaskId::new()).await;
    assert!(matches!(
        delete_result,
        Err(TaskRepositoryError::NotFound(_))
    ));
}
