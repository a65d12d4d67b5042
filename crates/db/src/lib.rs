//! SQLite persistence for tasks: pool setup, schema reconciliation and the
//! task repository.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub use schema::ensure_schema;

pub type DbPool = sqlx::SqlitePool;

/// Open (creating if needed) the SQLite database at `path`.
///
/// `path` may be a plain file path or a `sqlite:` URL.
pub async fn create_pool(path: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = if path.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(path)?
    } else {
        SqliteConnectOptions::new().filename(path)
    }
    .create_if_missing(true)
    .journal_mode(SqliteJournalMode::Wal)
    .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
