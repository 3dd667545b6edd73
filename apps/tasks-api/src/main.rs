use axum::Router;
use axum_helpers::server::{close_database, create_production_app, health_router};
use axum_helpers::{cors_layer_from_config, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::sql::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("Database connection failed: {}", e))?;

    domain_tasks::ensure_schema(&db)
        .await
        .map_err(|e| eyre::eyre!("Failed to prepare tasks table: {}", e))?;

    let state = AppState { config, db };
    let app = build_app(&state)?;

    info!("Starting tasks API with production-ready shutdown (30s timeout)");

    // State moves here for cleanup
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connections");
            close_database(state.db, "tasks").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Tasks API shutdown complete");
    Ok(())
}

/// Assembles the full application router.
///
/// - API routes (`/`, `/tasks`) wrapped with docs and middleware
/// - `/health`: liveness check with app name/version
/// - `/ready`: readiness check that pings the database
fn build_app(state: &AppState) -> eyre::Result<Router> {
    let cors = cors_layer_from_config(&state.config.server, &state.config.environment)?;

    let router = create_router::<openapi::ApiDoc>(api::routes(state), cors);

    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use config::Environment;
    use core_config::server::ServerConfig;
    use database::sql::SqlConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn test_state() -> AppState {
        let database = SqlConfig::new("sqlite::memory:").with_pool_size(1, 1);
        let db = database::sql::connect_from_config(database.clone())
            .await
            .unwrap();
        domain_tasks::ensure_schema(&db).await.unwrap();

        AppState {
            config: Config {
                app: core_config::app_info!(),
                database,
                server: ServerConfig::new("127.0.0.1".to_string(), 0),
                environment: Environment::Development,
            },
            db,
        }
    }

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_root_greets() {
        let app = build_app(&test_state().await).unwrap();

        let (status, body) = call(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, api::ROOT_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let app = build_app(&test_state().await).unwrap();

        let (status, body) = call(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "tasks_api");

        let (status, body) = call(&app, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "status": "ready", "database": "connected" }));
    }

    #[tokio::test]
    async fn test_tasks_are_mounted() {
        let app = build_app(&test_state().await).unwrap();

        let create = Request::builder()
            .method("POST")
            .uri("/tasks")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "title": "A", "priority": "High", "deadline": "2026-01-01" }).to_string(),
            ))
            .unwrap();
        let (status, _) = call(&app, create).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call(&app, get("/tasks")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_generic_404() {
        let app = build_app(&test_state().await).unwrap();

        let (status, body) = call(&app, get("/projects")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "The requested resource was not found");
    }

    #[tokio::test]
    async fn test_production_without_origins_is_rejected() {
        let mut state = test_state().await;
        state.config.environment = Environment::Production;

        assert!(build_app(&state).is_err());
    }
}
