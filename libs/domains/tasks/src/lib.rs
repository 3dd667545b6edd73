//! Tasks Domain
//!
//! Create, read, update, delete and list tasks over a SQL store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, id resolution
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, priority enum
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SqlTaskRepository, TaskService, ensure_schema, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//! ensure_schema(&db).await?;
//!
//! let service = TaskService::new(SqlTaskRepository::new(db));
//! let app = axum::Router::new().nest("/tasks", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod schema;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::TasksApiDoc;
pub use models::{CreateTask, NewTask, Task, TaskChanges, TaskPriority, UpdateTask};
pub use query::{ListTasksParams, TaskQuery, TaskSort};
pub use repository::TaskRepository;
pub use schema::ensure_schema;
pub use service::TaskService;
pub use sql::SqlTaskRepository;
