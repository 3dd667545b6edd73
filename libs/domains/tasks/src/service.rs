use std::sync::Arc;
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, NewTask, Task, TaskChanges, UpdateTask};
use crate::query::TaskQuery;
use crate::repository::TaskRepository;

/// CRUD operations on tasks.
///
/// Ids arrive as the raw path segment; anything that is not an integer can
/// never name a task and resolves to `NotFound`.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, then persist
    #[instrument(skip(self, input))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        let new_task = NewTask::try_from(input)?;
        self.repository.create(new_task).await
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        let task_id = parse_id(id)?;

        self.repository
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_tasks(&self, query: TaskQuery) -> TaskResult<Vec<Task>> {
        self.repository.list(query).await
    }

    /// The body is validated before the id is looked at, so an invalid body
    /// is reported even for an id that does not exist.
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        let changes = TaskChanges::try_from(input)?;
        let task_id = parse_id(id)?;

        self.repository.update(task_id, changes).await
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: &str) -> TaskResult<()> {
        let task_id = parse_id(id)?;

        if !self.repository.delete(task_id).await? {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn parse_id(id: &str) -> TaskResult<i32> {
    id.parse().map_err(|_| TaskError::NotFound(id.to_string()))
}
