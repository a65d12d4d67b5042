//! HTTP-level integration tests for the HTML page and list fragments.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, build_test_app, create_task, delete, get, post_empty, post_form};
use serde_json::json;
use sqlx::SqlitePool;

fn content_type(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[sqlx::test(migrations = false)]
async fn test_index_renders_full_page_with_tasks(pool: SqlitePool) {
    create_task(&pool, json!({ "title": "Visible task" })).await;

    let app = build_test_app(pool).await;
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Visible task"));
    assert!(html.contains("id=\"task-list\""));
}

#[sqlx::test(migrations = false)]
async fn test_list_fragment_applies_filters(pool: SqlitePool) {
    create_task(&pool, json!({ "title": "Buy milk" })).await;
    create_task(&pool, json!({ "title": "Walk dog", "status": "done" })).await;

    let app = build_test_app(pool).await;
    let response = get(app, "/fragments/tasks?status=done").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(!html.contains("<html"));
    assert!(html.contains("Walk dog"));
    assert!(!html.contains("Buy milk"));
}

#[sqlx::test(migrations = false)]
async fn test_form_create_returns_refreshed_fragment(pool: SqlitePool) {
    create_task(&pool, json!({ "title": "Existing" })).await;

    let app = build_test_app(pool).await;
    let response = post_form(
        app,
        "/fragments/tasks",
        "title=From+the+form&description=&status=&due_date=2025-12-24",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("hx-trigger").unwrap(), "tasks-changed");

    let html = body_text(response).await;
    let new_pos = html.find("From the form").expect("new task in fragment");
    let old_pos = html.find("Existing").expect("old task in fragment");
    assert!(new_pos < old_pos, "newest task should be listed first");
    assert!(html.contains("2025-12-24"));
    assert!(html.contains("2 tasks"));
}

#[sqlx::test(migrations = false)]
async fn test_form_create_with_blank_title_is_rejected(pool: SqlitePool) {
    let app = build_test_app(pool.clone()).await;
    let response = post_form(app, "/fragments/tasks", "title=&description=x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = build_test_app(pool).await;
    let html = body_text(get(app, "/fragments/tasks").await).await;
    assert!(html.contains("No tasks yet"));
}

#[sqlx::test(migrations = false)]
async fn test_fragment_complete_and_delete(pool: SqlitePool) {
    let created = create_task(&pool, json!({ "title": "Finish me" })).await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone()).await;
    let response = post_empty(app, &format!("/fragments/tasks/{id}/complete")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("hx-trigger").unwrap(), "tasks-changed");
    let html = body_text(response).await;
    assert!(html.contains("status-done"));
    assert!(!html.contains(&format!("/fragments/tasks/{id}/complete")));

    let app = build_test_app(pool.clone()).await;
    let response = delete(app, &format!("/fragments/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("hx-trigger").unwrap(), "tasks-changed");
    assert!(body_text(response).await.contains("No tasks yet"));

    let app = build_test_app(pool).await;
    let response = delete(app, &format!("/fragments/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn test_classic_form_redirects_to_index(pool: SqlitePool) {
    let app = build_test_app(pool.clone()).await;
    let response = post_form(app, "/add", "title=No+JS&due_date=not-a-date").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let app = build_test_app(pool).await;
    let html = body_text(get(app, "/").await).await;
    assert!(html.contains("No JS"));
}

#[sqlx::test(migrations = false)]
async fn test_filter_form_listens_for_list_changes(pool: SqlitePool) {
    create_task(&pool, json!({ "title": "Walk dog", "status": "done" })).await;

    let app = build_test_app(pool.clone()).await;
    let html = body_text(get(app, "/?status=done").await).await;
    assert!(html.contains("id=\"filters\""));
    assert!(html.contains("hx-on:tasks-changed"));

    let app = build_test_app(pool).await;
    let response = get(app, "/fragments/tasks?status=done").await;
    assert!(response.headers().get("hx-trigger").is_none());
}

#[sqlx::test(migrations = false)]
async fn test_fragment_with_non_numeric_id_returns_404(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let response = post_empty(app, "/fragments/tasks/seven/complete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
