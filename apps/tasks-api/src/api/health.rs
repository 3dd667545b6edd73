//! Readiness check against the task datastore.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check endpoint that runs `SELECT 1` on the pool.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let database: HealthCheckFuture = Box::pin(async {
        database::sql::check_health(&state.db)
            .await
            .map_err(|e| format!("Database ping failed: {}", e))
    });

    match run_health_checks(vec![("database", database)]).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
