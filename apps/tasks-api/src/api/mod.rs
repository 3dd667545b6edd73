use axum::{Router, routing::get};

pub mod health;
pub mod tasks;

/// Greeting served at `/`
pub const ROOT_MESSAGE: &str = "Task Management API is running!";

/// Creates the API routes.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/tasks", tasks::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}
