/// Error type for connector-level operations (connect, health checks).
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors reported by SeaORM / the driver
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
