//! Relational datastore connector
//!
//! Pool configuration, connect-with-retry and health checks over SeaORM.

mod config;
mod connector;
mod health;

pub use config::SqlConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, connect_with_options};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseBackend, DatabaseConnection, DbErr};
