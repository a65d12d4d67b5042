//! Server-rendered HTML for the browser UI.
//!
//! Templates are embedded at compile time and compiled once at startup.
//! `index.html` is a full document; `task_list.html` is the fragment swapped
//! into `#task-list` after every create, complete or delete.

use minijinja::{context, Environment};
use serde::Serialize;
use taskboard_core::task::TaskStatus;
use taskboard_db::models::task::Task;

/// How many of the newest tasks the HTML views show.
pub const VIEW_PAGE_SIZE: i64 = 50;

const INDEX: &str = "index.html";
const TASK_LIST: &str = "task_list.html";

/// A status choice for `<select>` elements.
#[derive(Serialize)]
struct StatusOption {
    value: &'static str,
    label: &'static str,
}

/// Filters echoed back into the page so the filter form keeps its values.
#[derive(Debug, Default, Serialize)]
pub struct ViewFilters {
    pub status: Option<String>,
    pub q: Option<String>,
}

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compile the embedded templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX, include_str!("../templates/index.html"))?;
        env.add_template(TASK_LIST, include_str!("../templates/task_list.html"))?;
        env.add_filter("status_label", status_label);
        Ok(Self { env })
    }

    /// Full page: forms plus the task list.
    pub fn index(
        &self,
        tasks: &[Task],
        total: i64,
        filters: &ViewFilters,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX)?.render(context! {
            tasks => tasks,
            total => total,
            filters => filters,
            statuses => status_options(),
        })
    }

    /// The list fragment on its own.
    pub fn task_list(&self, tasks: &[Task], total: i64) -> Result<String, minijinja::Error> {
        self.env.get_template(TASK_LIST)?.render(context! {
            tasks => tasks,
            total => total,
        })
    }
}

fn status_options() -> Vec<StatusOption> {
    TaskStatus::ALL
        .into_iter()
        .map(|s| StatusOption {
            value: s.as_str(),
            label: s.label(),
        })
        .collect()
}

fn status_label(value: String) -> String {
    value
        .parse::<TaskStatus>()
        .map(|s| s.label().to_string())
        .unwrap_or(value)
}
