use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Runs `SELECT 1` against the connection's backend.
///
/// Used by the readiness check; any failure is reported as
/// [`DatabaseError::HealthCheckFailed`].
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let backend = db.get_database_backend();
    debug!(?backend, "Running database health check");

    let stmt = Statement::from_string(backend, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("{backend:?} health check failed: {e}")))?;

    debug!("Database health check passed");
    Ok(())
}
