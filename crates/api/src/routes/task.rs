//! Route definitions for the `/tasks` JSON resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> replace
/// PATCH  /{id}             -> patch
/// DELETE /{id}             -> delete
/// POST   /{id}/complete    -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id)
                .put(task::replace)
                .patch(task::patch)
                .delete(task::delete),
        )
        .route("/{id}/complete", post(task::complete))
}
