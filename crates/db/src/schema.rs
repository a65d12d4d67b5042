//! Startup schema reconciliation.
//!
//! The `tasks` table is created when missing. For a table left behind by an
//! older build, any expected column that is absent is added. Existing columns
//! are never altered or dropped.

use std::collections::HashSet;

use sqlx::Row;

use crate::DbPool;

const CREATE_TASKS: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    description TEXT,
    status      TEXT    NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'in_progress', 'done')),
    due_date    TEXT,
    created_at  TEXT    NOT NULL,
    updated_at  TEXT    NOT NULL
)";

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks (created_at)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks (status)",
];

/// Columns that may be missing from an older table, with the definition used
/// to add them. `ADD COLUMN` only accepts constant defaults.
const ADDITIVE_COLUMNS: &[(&str, &str)] = &[
    ("description", "TEXT"),
    ("status", "TEXT NOT NULL DEFAULT 'pending'"),
    ("due_date", "TEXT"),
    ("created_at", "TEXT NOT NULL DEFAULT '1970-01-01T00:00:00+00:00'"),
    ("updated_at", "TEXT NOT NULL DEFAULT '1970-01-01T00:00:00+00:00'"),
];

/// Create or extend the schema. Safe to run on every startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TASKS).execute(pool).await?;

    let existing: HashSet<String> = sqlx::query("PRAGMA table_info(tasks)")
        .fetch_all(pool)
        .await?
        .iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect::<Result<_, _>>()?;

    for (column, definition) in ADDITIVE_COLUMNS {
        if !existing.contains(*column) {
            tracing::info!(column, "Adding missing column to tasks");
            sqlx::query(&format!("ALTER TABLE tasks ADD COLUMN {column} {definition}"))
                .execute(pool)
                .await?;
        }
    }

    for statement in CREATE_INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
