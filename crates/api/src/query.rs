//! Shared query parameter types for API and view handlers.

use serde::Deserialize;
use taskboard_core::pagination::Pagination;
use taskboard_db::models::task::TaskFilter;

/// Query parameters for task listings (`?page=&limit=&status=&q=`).
///
/// `page` and `limit` are kept as raw strings so a non-numeric value falls
/// back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub q: Option<String>,
}

impl TaskListParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_query(self.page.as_deref(), self.limit.as_deref())
    }

    pub fn filter(&self) -> TaskFilter {
        TaskFilter::new(self.status.clone(), self.q.clone())
    }
}
