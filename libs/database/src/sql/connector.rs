use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use super::SqlConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect with explicit SeaORM options.
///
/// ```ignore
/// use sea_orm::ConnectOptions;
/// use database::sql::connect_with_options;
///
/// let mut opt = ConnectOptions::new("sqlite::memory:");
/// opt.max_connections(1);
/// let db = connect_with_options(opt).await?;
/// ```
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Connect using a [`SqlConfig`].
pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect using a [`SqlConfig`], retrying with exponential backoff.
///
/// Only the initial connection is retried. Pass `None` for the default policy.
///
/// ```ignore
/// use database::common::RetryConfig;
/// use database::sql::{SqlConfig, connect_from_config_with_retry};
///
/// let config = SqlConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(10))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}
