use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{NewTask, Task, TaskChanges};
use crate::query::TaskQuery;

/// Repository trait for Task persistence
///
/// Every call is a fresh round trip; implementations hold no cached rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task; the store assigns `id` and `createdAt`
    async fn create(&self, input: NewTask) -> TaskResult<Task>;

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    async fn list(&self, query: TaskQuery) -> TaskResult<Vec<Task>>;

    /// Overwrite the present fields of an existing task.
    ///
    /// Fails with `TaskError::NotFound` when the id does not resolve, including
    /// when the row disappears between the read and the write.
    async fn update(&self, id: i32, changes: TaskChanges) -> TaskResult<Task>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}
