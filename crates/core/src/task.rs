//! Task lifecycle rules: the closed status set and per-operation validation.
//!
//! The three write paths treat an empty or missing `status` differently:
//!
//! | Operation | missing / `""`         | anything else     |
//! |-----------|------------------------|-------------------|
//! | create    | `pending`              | must be valid     |
//! | replace   | keep existing status   | must be valid     |
//! | patch     | keep existing status   | must be valid     |

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::Date;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Every legal status, in display order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    /// The stored / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-readable label for HTML views.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| invalid_status(s))
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn invalid_status(s: &str) -> CoreError {
    let allowed: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
    CoreError::Validation(format!(
        "invalid status '{s}'. Must be one of: {}",
        allowed.join(", ")
    ))
}

/// Status for a new task: missing or empty means `pending`.
pub fn resolve_create_status(raw: Option<&str>) -> Result<TaskStatus, CoreError> {
    match raw {
        None | Some("") => Ok(TaskStatus::Pending),
        Some(s) => s.parse(),
    }
}

/// Status for a full replace: missing or empty leaves the stored value alone.
///
/// Title and description are always overwritten by a replace, status is not.
/// Callers rely on this, so it stays.
pub fn resolve_replace_status(raw: Option<&str>) -> Result<Option<TaskStatus>, CoreError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Reject blank titles.
pub fn ensure_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation("title is required".into()));
    }
    Ok(())
}

/// Parse a due date sent over the JSON API.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, in which case
/// only the calendar date is kept.
pub fn parse_due_date(raw: &str) -> Result<Date, CoreError> {
    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| CoreError::Validation(format!("invalid due_date '{raw}', expected YYYY-MM-DD")))
}

/// Parse a due date from an HTML form. Blank or malformed input yields `None`.
pub fn parse_form_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Date::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `serde` helper for optional due-date fields on request DTOs.
///
/// `null`, a missing key and `""` all map to `None`.
pub fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => parse_due_date(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

/// Keys a client may never overwrite. They are dropped before validation.
const PROTECTED_KEYS: &[&str] = &["id", "created_at", "updated_at"];

/// A sparse set of changes parsed from a `PATCH` body.
///
/// The outer `Option` says whether the key was sent; for nullable columns the
/// inner `Option` distinguishes "set to this value" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<Date>>,
}

impl TaskPatch {
    /// Build a patch from a JSON object.
    ///
    /// Protected keys and unknown keys are ignored. A present field with the
    /// wrong JSON type, a blank title or an unknown status is rejected.
    pub fn from_json(mut body: Map<String, Value>) -> Result<Self, CoreError> {
        for key in PROTECTED_KEYS {
            body.remove(*key);
        }

        let mut patch = TaskPatch::default();

        if let Some(value) = body.remove("title") {
            let title = expect_string("title", value)?;
            ensure_title(&title)?;
            patch.title = Some(title);
        }

        if let Some(value) = body.remove("description") {
            patch.description = Some(match value {
                Value::Null => None,
                other => Some(expect_string("description", other)?),
            });
        }

        if let Some(value) = body.remove("status") {
            patch.status = match value {
                Value::Null => None,
                Value::String(s) if s.is_empty() => None,
                other => Some(expect_string("status", other)?.parse()?),
            };
        }

        if let Some(value) = body.remove("due_date") {
            patch.due_date = Some(match value {
                Value::Null => None,
                Value::String(s) if s.is_empty() => None,
                other => Some(parse_due_date(&expect_string("due_date", other)?)?),
            });
        }

        Ok(patch)
    }
}

fn expect_string(field: &str, value: Value) -> Result<String, CoreError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(CoreError::Validation(format!("{field} must be a string"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
