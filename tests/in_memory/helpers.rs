//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskQuery, TaskStatus, WorkspaceId},
    services::{CreateTaskRequest, TaskBoardService},
};

/// Workspace used by integration tests.
pub const WORKSPACE: &str = "ws-integration";

/// Service type exercised by integration tests.
pub type TestService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repository() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::new())
}

/// Provides a board query over the integration workspace.
///
/// # Panics
///
/// Panics if the workspace constant is blank.
#[fixture]
pub fn query() -> TaskQuery {
    TaskQuery::new(WorkspaceId::new(WORKSPACE).expect("valid workspace id"))
}

/// Builds a service over the given repository.
pub fn service_for(repository: &Arc<InMemoryTaskRepository>) -> TestService {
    TaskBoardService::new(Arc::clone(repository), Arc::new(DefaultClock))
}

/// Fixed due date for created tasks.
pub fn due_date() -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000, 0).unwrap_or_default()
}

/// Creates one task per name in the given column, in order.
///
/// # Errors
///
/// Returns an error if any task cannot be created.
pub async fn create_column(
    service: &TestService,
    status: TaskStatus,
    names: &[&str],
) -> Result<Vec<Task>, eyre::Report> {
    let mut created = Vec::with_capacity(names.len());
    for name in names {
        let request =
            CreateTaskRequest::new(WORKSPACE, "project-int", "member-int", *name, due_date())
                .with_status(status);
        created.push(service.create_task(request).await?);
    }
    Ok(created)
}

/// Returns task names in column order.
pub fn names(column: &[Task]) -> Vec<&str> {
    column.iter().map(Task::name).collect()
}
