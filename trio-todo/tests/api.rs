//! HTTP-level tests for the todo service against an in-memory database

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trio_core::db::memory_pool;
use trio_core::AppState;
use trio_todo::{build_router, migrate};

async fn app() -> Router {
    let pool = memory_pool().await.unwrap();
    migrate(&pool).await.unwrap();
    build_router(AppState::new(pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Lists 1 ("Home") and 2 ("Work"), three todos on list 1 and one on list 2
async fn seeded() -> Router {
    let app = app().await;
    for name in ["Home", "Work"] {
        let (status, _) = send(&app, "POST", "/lists/create", Some(json!({"name": name}))).await;
        assert_eq!(status, StatusCode::OK);
    }
    for (description, list_id) in [
        ("buy milk", json!(1)),
        ("walk dog", json!("1")),
        ("water plants", json!(1)),
        ("file report", json!(2)),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            "/todos/create",
            Some(json!({"description": description, "list_id": list_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    app
}

#[tokio::test]
async fn index_redirects_to_first_list() {
    let app = app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/lists/1");
}

#[tokio::test]
async fn list_page_shows_active_list_and_its_todos() {
    let app = seeded().await;
    let (status, body) = send(&app, "GET", "/lists/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_list"], json!({"id": 1, "name": "Home"}));
    assert_eq!(body["lists"].as_array().unwrap().len(), 2);

    let todos: Vec<_> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["description"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(todos, vec!["buy milk", "walk dog", "water plants"]);
}

#[tokio::test]
async fn missing_list_is_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/lists/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn lists_ordered_by_id() {
    let app = seeded().await;
    let (_, body) = send(&app, "GET", "/lists", None).await;
    assert_eq!(body["lists"], json!([{"id": 1, "name": "Home"}, {"id": 2, "name": "Work"}]));
}

#[tokio::test]
async fn create_todo_returns_record() {
    let app = seeded().await;
    let (status, body) = send(
        &app,
        "POST",
        "/todos/create",
        Some(json!({"description": "  call mum ", "list_id": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "call mum");
    assert_eq!(body["completed"], false);
    assert_eq!(body["list_id"], 2);
    assert_eq!(body["id"], 5);
}

#[tokio::test]
async fn blank_description_is_400() {
    let app = seeded().await;
    let (status, _) = send(
        &app,
        "POST",
        "/todos/create",
        Some(json!({"description": "   ", "list_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn todo_on_unknown_list_is_404() {
    let app = seeded().await;
    let (status, _) = send(
        &app,
        "POST",
        "/todos/create",
        Some(json!({"description": "orphan", "list_id": 77})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn set_completed_round_trip() {
    let app = seeded().await;

    let (status, body) = send(
        &app,
        "POST",
        "/todos/2/set_completed",
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);

    let (_, body) = send(&app, "GET", "/lists/1", None).await;
    assert_eq!(body["todos"][1]["completed"], true);
    assert_eq!(body["todos"][0]["completed"], false);
}

#[tokio::test]
async fn set_completed_errors() {
    let app = seeded().await;

    let (status, _) = send(
        &app,
        "POST",
        "/todos/99/set_completed",
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/todos/1/set_completed", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_todo_both_ways() {
    let app = seeded().await;

    let (status, body) = send(&app, "DELETE", "/todos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 1}));

    let (status, _) = send(&app, "GET", "/todos/2/del_todo", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/lists/1", None).await;
    assert_eq!(body["todos"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", "/todos/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_list_removes_its_todos() {
    let app = seeded().await;

    let (status, _) = send(&app, "DELETE", "/lists/2", None).await;
    assert_eq!(status, StatusCode::OK);

    // The todo on list 2 went with it
    let (status, _) = send(&app, "DELETE", "/todos/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/lists/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = seeded().await;
    let (status, _) = send(&app, "GET", "/lists/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
