use axum::Router;
use domain_tasks::{SqlTaskRepository, TaskService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqlTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);
    handlers::router(service)
}
