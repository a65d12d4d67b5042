pub mod health;
pub mod task;
pub mod view;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /health                         service + database health
/// /tasks ...                      JSON API (see `task::router`)
/// / , /add , /fragments/tasks ... HTML views (see `view::router`)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/tasks", task::router())
        .merge(view::router())
}
