use crate::models::{NewTask, Task, TaskPriority};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the `tasks` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub deadline: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            category: model.category,
            priority: model.priority,
            deadline: model.deadline.into(),
            created_at: model.created_at.into(),
        }
    }
}

impl From<NewTask> for ActiveModel {
    fn from(input: NewTask) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            category: Set(input.category),
            priority: Set(input.priority),
            deadline: Set(input.deadline.into()),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
