//! Handlers for the HTML views.
//!
//! Every mutating endpoint answers with the refreshed, unfiltered list
//! fragment for the newest [`VIEW_PAGE_SIZE`] tasks, re-read after the change.
//! It also sends an `HX-Trigger: tasks-changed` header so the page clears its
//! filter form and the form matches the list it sits above.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_core::pagination::Pagination;
use taskboard_core::task::parse_form_date;
use taskboard_core::types::DbId;
use taskboard_db::models::task::{CreateTask, Task, TaskFilter};
use taskboard_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppForm, AppPath};
use crate::query::TaskListParams;
use crate::state::AppState;
use crate::views::{ViewFilters, VIEW_PAGE_SIZE};

/// Fields posted by the create form. Browsers send empty strings for blank
/// inputs, so everything defaults to empty.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_date: String,
}

impl TaskForm {
    /// Convert to the JSON create DTO. A malformed date is dropped rather
    /// than rejected.
    pub fn into_create_task(self) -> CreateTask {
        CreateTask {
            title: self.title,
            description: Some(self.description).filter(|d| !d.is_empty()),
            status: self.status,
            due_date: parse_form_date(&self.due_date),
        }
    }
}

/// htmx response header telling the page the list was re-read unfiltered.
pub const TASKS_CHANGED: [(&str, &str); 1] = [("HX-Trigger", "tasks-changed")];

type MutationFragment = ([(&'static str, &'static str); 1], Html<String>);

async fn top_page(state: &AppState, filter: &TaskFilter) -> AppResult<(Vec<Task>, i64)> {
    let pagination = Pagination::first(VIEW_PAGE_SIZE);
    let total = TaskRepo::count(&state.pool, filter).await?;
    let tasks = TaskRepo::list(&state.pool, filter, &pagination).await?;
    Ok((tasks, total))
}

async fn render_list(state: &AppState, filter: &TaskFilter) -> AppResult<Html<String>> {
    let (tasks, total) = top_page(state, filter).await?;
    Ok(Html(state.views.task_list(&tasks, total)?))
}

async fn create_from_form(state: &AppState, form: TaskForm) -> AppResult<Task> {
    let new_task = form.into_create_task().into_new_task()?;
    let task = TaskRepo::create(&state.pool, &new_task).await?;
    tracing::info!(task_id = task.id, status = %task.status, "Task created from form");
    Ok(task)
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Html<String>> {
    let filter = params.filter();
    let (tasks, total) = top_page(&state, &filter).await?;
    let filters = ViewFilters {
        status: filter.status,
        q: filter.search,
    };
    Ok(Html(state.views.index(&tasks, total, &filters)?))
}

/// GET /fragments/tasks
pub async fn list_fragment(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Html<String>> {
    render_list(&state, &params.filter()).await
}

/// POST /fragments/tasks
pub async fn create_fragment(
    State(state): State<AppState>,
    AppForm(form): AppForm<TaskForm>,
) -> AppResult<MutationFragment> {
    create_from_form(&state, form).await?;
    Ok((TASKS_CHANGED, render_list(&state, &TaskFilter::default()).await?))
}

/// POST /fragments/tasks/{id}/complete
pub async fn complete_fragment(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<MutationFragment> {
    TaskRepo::complete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    tracing::info!(task_id = id, "Task completed from view");
    Ok((TASKS_CHANGED, render_list(&state, &TaskFilter::default()).await?))
}

/// DELETE /fragments/tasks/{id}
pub async fn delete_fragment(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<MutationFragment> {
    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }
    tracing::info!(task_id = id, "Task deleted from view");
    Ok((TASKS_CHANGED, render_list(&state, &TaskFilter::default()).await?))
}

/// POST /add
///
/// Plain form post for browsers without JavaScript; redirects back to `/`.
pub async fn create_classic(
    State(state): State<AppState>,
    AppForm(form): AppForm<TaskForm>,
) -> AppResult<Redirect> {
    create_from_form(&state, form).await?;
    Ok(Redirect::to("/"))
}
