//! Creates the `tasks` table on first start.
//!
//! Idempotent, with no versioning: an existing table is left as it is.

use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};
use tracing::info;

const POSTGRES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL CHECK (title <> ''),
    description TEXT,
    category TEXT,
    priority TEXT NOT NULL CHECK (priority IN ('Low', 'Medium', 'High')),
    deadline TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)"#;

// AUTOINCREMENT keeps SQLite from reusing ids of deleted rows
const SQLITE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (title <> ''),
    description TEXT,
    category TEXT,
    priority TEXT NOT NULL CHECK (priority IN ('Low', 'Medium', 'High')),
    deadline TEXT NOT NULL,
    created_at TEXT NOT NULL
)"#;

/// Issues `CREATE TABLE IF NOT EXISTS tasks` for the connection's backend.
pub async fn ensure_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    let ddl = match backend {
        DatabaseBackend::Postgres => POSTGRES_DDL,
        DatabaseBackend::Sqlite => SQLITE_DDL,
        other => {
            return Err(DbErr::Custom(format!(
                "unsupported database backend for tasks: {other:?}"
            )));
        }
    };

    db.execute_unprepared(ddl).await?;
    info!(?backend, "Ensured tasks table exists");
    Ok(())
}
