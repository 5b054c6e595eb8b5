//! In-memory integration tests for repository queries and batches.

use std::sync::Arc;

use super::helpers::{
    WORKSPACE, create_column, due_date, names, query, repository, service_for,
};
use chrono::Duration;
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{MemberId, Position, TaskId, TaskPositionUpdate, TaskQuery, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
    services::CreateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_applies_query_filters(
    repository: Arc<InMemoryTaskRepository>,
    query: TaskQuery,
) -> eyre::Result<()> {
    let service = service_for(&repository);
    create_column(&service, TaskStatus::Todo, &["Write docs", "Fix login"]).await?;
    let late = CreateTaskRequest::new(
        WORKSPACE,
        "project-int",
        "member-other",
        "Write changelog",
        due_date() + Duration::days(3),
    );
    service.create_task(late).await?;

    let by_search = repository.list(&query.clone().with_search("write")).await?;
    let by_assignee = repository
        .list(&query.clone().with_assignee(MemberId::new("member-other")?))
        .await?;
    let by_day = repository
        .list(&query.with_due_on(due_date().date_naive()))
        .await?;

    eyre::ensure!(by_search.len() == 2);
    eyre::ensure!(names(&by_assignee) == vec!["Write changelog"]);
    eyre::ensure!(by_day.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_batch_leaves_every_task_untouched(
    repository: Arc<InMemoryTaskRepository>,
    query: TaskQuery,
) -> eyre::Result<()> {
    let service = service_for(&repository);
    let created = create_column(&service, TaskStatus::Todo, &["one", "two"]).await?;
    let before = repository.list(&query).await?;
    let mut batch: Vec<TaskPositionUpdate> = created
        .iter()
        .map(|task| TaskPositionUpdate {
            id: task.id().clone(),
            status: TaskStatus::Done,
            position: Position::new(1000),
        })
        .collect();
    batch.push(TaskPositionUpdate {
        id: TaskId::new("missing")?,
        status: TaskStatus::Done,
        position: Position::new(3000),
    });

    let result = repository.bulk_update(&batch, due_date()).await;

    eyre::ensure!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
    let after = repository.list(&query).await?;
    eyre::ensure!(before.len() == after.len());
    for task in &after {
        eyre::ensure!(before.contains(task), "task {} changed", task.id());
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_require_a_stored_task(
    repository: Arc<InMemoryTaskRepository>,
    query: TaskQuery,
) -> eyre::Result<()> {
    let service = service_for(&repository);
    let created = create_column(&service, TaskStatus::Todo, &["keep"]).await?;
    let mut stored = created
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("no task created"))?;
    let missing = TaskId::new("missing")?;

    let delete_missing = repository.delete(&missing).await;
    stored.rename("kept")?;
    repository.update(&stored).await?;
    repository.delete(stored.id()).await?;
    let update_deleted = repository.update(&stored).await;

    eyre::ensure!(matches!(delete_missing, Err(TaskRepositoryError::NotFound(_))));
    eyre::ensure!(matches!(
        update_deleted,
        Err(TaskRepositoryError::NotFound(ref id)) if id == stored.id()
    ));
    eyre::ensure!(repository.list(&query).await?.is_empty());
    Ok(())
}
