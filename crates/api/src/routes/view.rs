//! Route definitions for the HTML views.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::view;
use crate::state::AppState;

/// Browser-facing routes, mounted at the root.
///
/// ```text
/// GET    /                                  -> index
/// POST   /add                               -> create_classic (303 to /)
/// GET    /fragments/tasks                   -> list_fragment
/// POST   /fragments/tasks                   -> create_fragment
/// POST   /fragments/tasks/{id}/complete     -> complete_fragment
/// DELETE /fragments/tasks/{id}              -> delete_fragment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view::index))
        .route("/add", post(view::create_classic))
        .route(
            "/fragments/tasks",
            get(view::list_fragment).post(view::create_fragment),
        )
        .route("/fragments/tasks/{id}", delete(view::delete_fragment))
        .route("/fragments/tasks/{id}/complete", post(view::complete_fragment))
}
