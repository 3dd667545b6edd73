//! In-memory SQLite test infrastructure
//!
//! Every `TestDatabase` is a private database that disappears with the pool,
//! so tests never see each other's rows.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Open a fresh in-memory database
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // One connection: a second one would open a different empty database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");

        tracing::debug!("Test database ready (SQLite in-memory)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
