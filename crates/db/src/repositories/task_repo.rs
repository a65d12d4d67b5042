//! Repository for the `tasks` table.

use chrono::Utc;
use sqlx::SqlitePool;
use taskboard_core::pagination::Pagination;
use taskboard_core::task::{TaskPatch, TaskStatus};
use taskboard_core::types::DbId;

use crate::models::task::{NewTask, Task, TaskFilter, TaskReplacement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, due_date, created_at, updated_at";

/// Filter clause shared by `list` and `count`. `$1` is the status, `$2` the
/// `LIKE` pattern; either may be NULL to disable that filter.
const FILTER: &str = "($1 IS NULL OR status = $1)
    AND ($2 IS NULL OR title LIKE $2 OR description LIKE $2)";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewTask) -> Result<Task, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO tasks (title, description, status, due_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.as_str())
            .bind(input.due_date)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of tasks matching `filter`, newest first.
    pub async fn list(
        pool: &SqlitePool,
        filter: &TaskFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&filter.status)
            .bind(filter.like_pattern())
            .bind(pagination.limit)
            .bind(pagination.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all tasks matching `filter`, regardless of pagination.
    pub async fn count(pool: &SqlitePool, filter: &TaskFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM tasks WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.status)
            .bind(filter.like_pattern())
            .fetch_one(pool)
            .await
    }

    /// Overwrite a task's editable fields.
    ///
    /// `status` is only written when the replacement carries one.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &TaskReplacement,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $2,
                description = $3,
                status = COALESCE($4, status),
                due_date = $5,
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.map(TaskStatus::as_str))
            .bind(input.due_date)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Apply a sparse patch. Only fields present in `patch` are written.
    ///
    /// Nullable columns carry a "was sent" flag so that an explicit `null`
    /// clears the column while an absent key leaves it alone.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn patch(
        pool: &SqlitePool,
        id: DbId,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status),
                due_date = CASE WHEN $6 THEN $7 ELSE due_date END,
                updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(patch.description.is_some())
            .bind(patch.description.clone().flatten())
            .bind(patch.status.map(TaskStatus::as_str))
            .bind(patch.due_date.is_some())
            .bind(patch.due_date.flatten())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Mark a task done. Completing an already-done task is a no-op apart
    /// from `updated_at`. Returns `None` if no row with the given `id` exists.
    pub async fn complete(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET status = $2, updated_at = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(TaskStatus::Done.as_str())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
