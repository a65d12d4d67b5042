//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::CoreError;
use taskboard_core::pagination::Pagination;
use taskboard_core::task::{
    deserialize_due_date, resolve_create_status, resolve_replace_status, TaskStatus,
};
use taskboard_core::types::{Date, DbId, Timestamp};
use validator::{Validate, ValidationErrors};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    pub due_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to `pending` when omitted or empty.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<Date>,
}

/// Request body for a full replace.
///
/// `title`, `description` and `due_date` always overwrite the stored values.
/// `status` only does when it is present and non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceTask {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<Date>,
}

/// Validated input for [`crate::repositories::TaskRepo::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<Date>,
}

/// Validated input for [`crate::repositories::TaskRepo::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReplacement {
    pub title: String,
    pub description: Option<String>,
    /// `None` keeps the stored status.
    pub status: Option<TaskStatus>,
    pub due_date: Option<Date>,
}

impl CreateTask {
    pub fn into_new_task(self) -> Result<NewTask, CoreError> {
        self.validate().map_err(validation_error)?;
        let status = resolve_create_status(self.status.as_deref())?;
        Ok(NewTask {
            title: self.title,
            description: self.description,
            status,
            due_date: self.due_date,
        })
    }
}

impl ReplaceTask {
    pub fn into_replacement(self) -> Result<TaskReplacement, CoreError> {
        self.validate().map_err(validation_error)?;
        let status = resolve_replace_status(self.status.as_deref())?;
        Ok(TaskReplacement {
            title: self.title,
            description: self.description,
            status,
            due_date: self.due_date,
        })
    }
}

/// Flatten `validator` output into a single human-readable message.
fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join("; "))
}

/// List filters. Empty strings are treated as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Exact status match. Not validated: an unknown value matches nothing.
    pub status: Option<String>,
    /// Substring match against title or description.
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn new(status: Option<String>, search: Option<String>) -> Self {
        Self {
            status: status.filter(|s| !s.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// The `LIKE` pattern for `search`, if any.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|q| format!("%{q}%"))
    }
}

/// One page of a filtered task listing.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    pub page: i64,
    pub limit: i64,
    /// Rows matching the filter, ignoring pagination.
    pub total: i64,
    pub tasks: Vec<Task>,
}

impl TaskPage {
    pub fn new(pagination: Pagination, total: i64, tasks: Vec<Task>) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total,
            tasks,
        }
    }
}
