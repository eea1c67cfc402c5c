//! Black-box tests for the REST API, driving the router directly with
//! `tower::ServiceExt::oneshot` against a scratch data directory.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use taskdeck_api::http::router::build_router;
use taskdeck_api::state::AppState;

async fn test_router() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::init_at(dir.path()).await.unwrap();
    (dir, build_router(state))
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(router: &Router, body: Value) -> Value {
    let (status, task) = send(router, Method::POST, "/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    task
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (_dir, router) = test_router().await;
    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_valid_task_returns_201_and_is_retrievable() {
    let (_dir, router) = test_router().await;

    let task = create(&router, json!({"title": "Write report"})).await;
    assert_eq!(task["title"], "Write report");
    assert_eq!(task["description"], "");
    assert_eq!(task["completed"], false);
    let id = task["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let (status, fetched) = send(&router, Method::GET, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, task);
}

#[tokio::test]
async fn create_without_title_returns_400_with_field_violation() {
    let (_dir, router) = test_router().await;

    // Missing title entirely: rejected at deserialization.
    let (status, _) = send(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({"description": "orphan"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Blank title: rejected by validation, with field detail.
    let (status, body) = send(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({"title": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["fields"][0]["field"], "title");
}

#[tokio::test]
async fn create_ignores_unknown_fields() {
    let (_dir, router) = test_router().await;
    let task = create(
        &router,
        json!({"title": "Permissive", "priority": "high", "owner": 7}),
    )
    .await;
    assert_eq!(task["title"], "Permissive");
}

#[tokio::test]
async fn get_unknown_or_malformed_id_returns_404() {
    let (_dir, router) = test_router().await;

    let (status, _) = send(
        &router,
        Method::GET,
        "/tasks/00000000-0000-7000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::GET, "/tasks/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_completed_changes_only_completed() {
    let (_dir, router) = test_router().await;
    let task = create(
        &router,
        json!({"title": "Write report", "description": "quarterly numbers"}),
    )
    .await;
    let id = task["id"].as_str().unwrap();

    let (status, patched) = send(
        &router,
        Method::PATCH,
        &format!("/tasks/{id}"),
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["completed"], true);
    assert_eq!(patched["title"], "Write report");
    assert_eq!(patched["description"], "quarterly numbers");
}

#[tokio::test]
async fn patch_unknown_id_returns_404() {
    let (_dir, router) = test_router().await;
    let (status, _) = send(
        &router,
        Method::PATCH,
        "/tasks/00000000-0000-7000-8000-000000000000",
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_all_fields_and_resets_omitted_ones() {
    let (_dir, router) = test_router().await;
    let task = create(
        &router,
        json!({"title": "Old", "description": "old words", "completed": true}),
    )
    .await;
    let id = task["id"].as_str().unwrap();

    let (status, replaced) = send(
        &router,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({"title": "New"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], task["id"]);
    assert_eq!(replaced["title"], "New");
    assert_eq!(replaced["description"], "");
    assert_eq!(replaced["completed"], false);
    assert_eq!(replaced["created_at"], task["created_at"]);
}

#[tokio::test]
async fn put_omitting_title_returns_400_and_leaves_entity_unchanged() {
    let (_dir, router) = test_router().await;
    let task = create(&router, json!({"title": "Keep me", "completed": true})).await;
    let id = task["id"].as_str().unwrap();

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({"description": "no title"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stored) = send(&router, Method::GET, &format!("/tasks/{id}"), None).await;
    assert_eq!(stored, task);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let (_dir, router) = test_router().await;
    let task = create(&router, json!({"title": "Ephemeral"})).await;
    let id = task["id"].as_str().unwrap();

    let (status, body) = send(&router, Method::DELETE, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&router, Method::GET, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::DELETE, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_created_tasks_in_insertion_order() {
    let (_dir, router) = test_router().await;
    for i in 0..4 {
        create(&router, json!({"title": format!("Task {i}")})).await;
    }

    let (status, body) = send(&router, Method::GET, "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[0]["title"], "Task 0");
    assert_eq!(tasks[3]["title"], "Task 3");
}

#[tokio::test]
async fn list_supports_filter_and_pagination() {
    let (_dir, router) = test_router().await;
    create(&router, json!({"title": "Done", "completed": true})).await;
    for i in 0..3 {
        create(&router, json!({"title": format!("Pending {i}")})).await;
    }

    let (status, body) = send(&router, Method::GET, "/tasks?completed=true", None).await;
    assert_eq!(status, StatusCode::OK);
    let done = body.as_array().unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0]["title"], "Done");

    let (_, body) = send(
        &router,
        Method::GET,
        "/tasks?completed=false&limit=2&offset=1",
        None,
    )
    .await;
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["title"], "Pending 1");
    assert_eq!(page[1]["title"], "Pending 2");
}

#[tokio::test]
async fn list_sort_descending_by_title() {
    let (_dir, router) = test_router().await;
    for title in ["alpha", "charlie", "bravo"] {
        create(&router, json!({"title": title})).await;
    }

    let (_, body) = send(&router, Method::GET, "/tasks?sort=title&order=desc", None).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["charlie", "bravo", "alpha"]);
}
