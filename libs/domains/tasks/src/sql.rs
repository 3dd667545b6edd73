use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{NewTask, Task, TaskChanges},
    query::TaskQuery,
    repository::TaskRepository,
};

const CREATE_FAILED: &str = "Error creating task";
const LIST_FAILED: &str = "Error fetching tasks";
const GET_FAILED: &str = "Error fetching task";
const UPDATE_FAILED: &str = "Error updating task";
const DELETE_FAILED: &str = "Error deleting task";

/// [`TaskRepository`] over any SeaORM connection (PostgreSQL or SQLite).
#[derive(Clone)]
pub struct SqlTaskRepository {
    db: DatabaseConnection,
}

impl SqlTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SqlTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| TaskError::database(CREATE_FAILED, e))?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TaskError::database(GET_FAILED, e))?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, query: TaskQuery) -> TaskResult<Vec<Task>> {
        let models = query
            .apply(entity::Entity::find())
            .all(&self.db)
            .await
            .map_err(|e| TaskError::database(LIST_FAILED, e))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, changes: TaskChanges) -> TaskResult<Task> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TaskError::database(UPDATE_FAILED, e))?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        if changes.is_empty() {
            return Ok(model.into());
        }

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = Set(description);
        }
        if let Some(category) = changes.category {
            active_model.category = Set(category);
        }
        if let Some(priority) = changes.priority {
            active_model.priority = Set(priority);
        }
        if let Some(deadline) = changes.deadline {
            active_model.deadline = Set(deadline.into());
        }

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(task_id = id, "Updated task");
                Ok(model.into())
            }
            // Row deleted after the read above
            Err(DbErr::RecordNotUpdated) => Err(TaskError::NotFound(id.to_string())),
            Err(e) => Err(TaskError::database(UPDATE_FAILED, e)),
        }
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TaskError::database(DELETE_FAILED, e))?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
