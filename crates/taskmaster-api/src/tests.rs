//! HTTP Client Tests
//!
//! Runs `HttpTaskApi` against a mockito server.

use mockito::Matcher;
use serde_json::json;

use crate::{ApiError, HttpTaskApi, Priority, TaskApi, TaskDraft, TaskFilter, TaskPatch};

fn task_list_body() -> String {
    json!({
        "success": true,
        "count": 2,
        "data": [
            { "id": 2, "title": "Second", "description": null, "priority": "High", "completed": false },
            { "id": 1, "title": "First", "description": "notes", "priority": "Low", "completed": true }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_list_all_tasks() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("GET", "/api/tasks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(task_list_body())
        .expect(1)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let tasks = api.list_tasks(TaskFilter::All).await.expect("Failed to list tasks");

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 2);
    assert_eq!(tasks[1].description.as_deref(), Some("notes"));
    handler.assert_async().await;
}

#[tokio::test]
async fn test_list_tolerates_null_priority() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/tasks")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [
                    { "id": 1, "title": "Kept", "priority": "Low", "completed": false },
                    { "id": 2, "title": "Unset", "priority": null, "completed": true,
                      "created_at": "not a date" }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let tasks = api.list_tasks(TaskFilter::All).await.expect("Failed to list tasks");

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].priority, Priority::Other(String::new()));
    assert_eq!(tasks[1].created_at, None);
}

#[tokio::test]
async fn test_list_filtered_tasks() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("GET", "/api/tasks")
        .match_query(Matcher::UrlEncoded("completed".into(), "false".into()))
        .with_status(200)
        .with_body(r#"{"success": true, "data": [], "count": 0}"#)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let tasks = api.list_tasks(TaskFilter::Pending).await.expect("Failed to list tasks");

    assert!(tasks.is_empty());
    handler.assert_async().await;
}

#[tokio::test]
async fn test_search_escapes_query() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("GET", "/api/tasks/search")
        .match_query(Matcher::UrlEncoded("q".into(), "milk & eggs".into()))
        .with_status(200)
        .with_body(task_list_body())
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let tasks = api.search_tasks("milk & eggs").await.expect("Failed to search");

    assert_eq!(tasks.len(), 2);
    handler.assert_async().await;
}

#[tokio::test]
async fn test_get_task_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/tasks/42")
        .with_status(404)
        .with_body(r#"{"success": false, "error": "Task not found"}"#)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let err = api.get_task(42).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status { status: 404, message: Some("Task not found".into()) }
    );
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_application_failure_on_ok_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/tasks")
        .with_status(200)
        .with_body(r#"{"success": false, "error": "database unavailable"}"#)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let err = api.list_tasks(TaskFilter::All).await.unwrap_err();

    assert_eq!(err, ApiError::Application("database unavailable".into()));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/tasks/1")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let err = api.get_task(1).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_create_task_sends_draft() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("POST", "/api/tasks")
        .match_body(Matcher::Json(json!({
            "title": "Buy milk",
            "description": null,
            "priority": "Medium",
            "completed": false
        })))
        .with_status(201)
        .with_body(r#"{"success": true, "data": {"id": 9}, "message": "Task created successfully"}"#)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let draft = TaskDraft {
        title: "Buy milk".into(),
        description: None,
        priority: Priority::Medium,
        completed: false,
    };
    let message = api.create_task(&draft).await.expect("Failed to create");

    assert_eq!(message, "Task created successfully");
    handler.assert_async().await;
}

#[tokio::test]
async fn test_toggle_sends_only_completed() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("PUT", "/api/tasks/5")
        .match_body(Matcher::Json(json!({ "completed": true })))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Task updated successfully"}"#)
        .expect(1)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    api.update_task(5, &TaskPatch::completion(true))
        .await
        .expect("Failed to update");

    handler.assert_async().await;
}

#[tokio::test]
async fn test_delete_task() {
    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("DELETE", "/api/tasks/3")
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Task deleted successfully"}"#)
        .create_async()
        .await;

    let api = HttpTaskApi::new(&server.url());
    let message = api.delete_task(3).await.expect("Failed to delete");

    assert_eq!(message, "Task deleted successfully");
    handler.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let api = HttpTaskApi::new("http://127.0.0.1:1");
    let err = api.list_tasks(TaskFilter::All).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}
