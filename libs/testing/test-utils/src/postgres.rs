//! PostgreSQL test infrastructure
//!
//! `TestPostgres` runs a throwaway server in Docker. The database starts
//! empty; callers bootstrap their own tables the way the service does at
//! startup.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

const IMAGE_TAG: &str = "17-alpine";

pub struct TestPostgres {
    // Dropping the handle stops and removes the container
    _container: ContainerAsync<Postgres>,
    url: String,
    pub connection: DatabaseConnection,
}

impl TestPostgres {
    /// Start a container and open a small pool against it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestPostgres;
    ///
    /// # async fn example() {
    /// let db = TestPostgres::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag(IMAGE_TAG)
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host = container
            .get_host()
            .await
            .expect("Failed to resolve container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to resolve container port");

        let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let mut options = ConnectOptions::new(url.as_str());
        options.max_connections(4).sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to connect to Postgres container");

        tracing::debug!(%host, port, "Test database ready (Postgres {IMAGE_TAG})");

        Self {
            _container: container,
            url,
            connection,
        }
    }

    /// Connection URL, for code that opens its own pool
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
