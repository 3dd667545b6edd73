//! Application state management.
//!
//! The state is built once at startup and cloned into the routers that need
//! it; the connection pool inside is reference counted.

use database::sql::DatabaseConnection;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Connection pool for the tasks table
    pub db: DatabaseConnection,
}
