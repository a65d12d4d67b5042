//! Handlers for the `/tasks` JSON resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use taskboard_core::error::CoreError;
use taskboard_core::task::TaskPatch;
use taskboard_core::types::DbId;
use taskboard_db::models::task::{CreateTask, ReplaceTask, Task, TaskPage};
use taskboard_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::TaskListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| not_found(id))
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let new_task = input.into_new_task()?;
    let task = TaskRepo::create(&state.pool, &new_task).await?;

    tracing::info!(task_id = task.id, status = %task.status, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
///
/// Filters by exact `status` and by `q` (substring of title or description),
/// newest first. `total` counts every match, not just this page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<TaskPage>> {
    let pagination = params.pagination();
    let filter = params.filter();

    let total = TaskRepo::count(&state.pool, &filter).await?;
    let tasks = TaskRepo::list(&state.pool, &filter, &pagination).await?;

    Ok(Json(TaskPage::new(pagination, total, tasks)))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
///
/// Replaces title, description and due date. Status is only replaced when
/// the body carries a non-empty one. An unknown id is a 404 whatever the body.
pub async fn replace(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReplaceTask>,
) -> AppResult<Json<Task>> {
    ensure_exists(&state, id).await?;
    let replacement = input.into_replacement()?;
    let task = TaskRepo::replace(&state.pool, id, &replacement)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(task_id = task.id, status = %task.status, "Task replaced");

    Ok(Json(task))
}

/// PATCH /tasks/{id}
///
/// Applies only the keys present in the body. `id`, `created_at` and
/// `updated_at` are ignored.
pub async fn patch(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> AppResult<Json<Task>> {
    ensure_exists(&state, id).await?;
    let patch = TaskPatch::from_json(body)?;
    let task = TaskRepo::patch(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(task_id = task.id, status = %task.status, "Task patched");

    Ok(Json(task))
}

/// POST /tasks/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::complete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(task_id = task.id, "Task completed");

    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        tracing::info!(task_id = id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
