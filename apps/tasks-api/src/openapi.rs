use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Task Management API",
        version = "0.1.0",
        description = "Create, list, update and delete tasks with a category, priority and deadline"
    ),
    nest(
        (path = "/tasks", api = domain_tasks::TasksApiDoc)
    )
)]
pub struct ApiDoc;
