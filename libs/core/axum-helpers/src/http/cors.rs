use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// CORS layer restricted to `allowed_origins`.
///
/// Methods: GET, POST, PUT, DELETE, OPTIONS. Headers: Content-Type, Accept.
/// Fails if any origin is not a valid header value or the list is empty.
pub fn create_cors_layer(allowed_origins: &[String]) -> io::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {e}"),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Allows any origin. Only used outside production.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Picks the CORS layer for a deployment.
///
/// An explicit `CORS_ALLOWED_ORIGIN` list always wins. Without one,
/// production refuses to start and development falls back to permissive.
pub fn cors_layer_from_config(
    server: &ServerConfig,
    environment: &Environment,
) -> io::Result<CorsLayer> {
    if !server.cors_allowed_origins.is_empty() {
        info!(origins = ?server.cors_allowed_origins, "CORS configured with allowed origins");
        return create_cors_layer(&server.cors_allowed_origins);
    }

    if environment.is_production() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN is required in production. Example: CORS_ALLOWED_ORIGIN=https://tasks.example.com",
        ));
    }

    warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
    Ok(create_permissive_cors_layer())
}
