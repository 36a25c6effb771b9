use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use notes_app::core::{error::ErrorResponse, response::ApiResponse};
use notes_app::infrastructure::{config::DatabaseConfig, database::DatabaseManager};
use notes_app::{build_router, AppState, Note};
use serde_json::json;
use std::time::Duration;

async fn create_test_server(validate_input: bool) -> TestServer {
    let database = DatabaseManager::connect(&DatabaseConfig::default())
        .await
        .expect("Failed to open in-memory database");

    let state = AppState::new(database.repository(), validate_input);
    let app = build_router(state, Duration::from_secs(5));
    TestServer::new(app).unwrap()
}

async fn create_note(server: &TestServer, title: &str, content: &str) -> Note {
    let response = server
        .post("/notes")
        .json(&json!({ "title": title, "content": content }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<ApiResponse<Note>>().data
}

async fn note_count(server: &TestServer) -> usize {
    let response = server.get("/notes").await;
    response.assert_status_ok();
    response.json::<ApiResponse<Vec<Note>>>().data.len()
}

#[tokio::test]
async fn test_create_then_get_returns_same_note() {
    let server = create_test_server(false).await;

    let created = create_note(&server, "A", "B").await;
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "A");
    assert_eq!(created.content, "B");

    let response = server.get("/notes/1").await;
    response.assert_status_ok();
    let fetched = response.json::<ApiResponse<Note>>().data;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_wraps_notes_in_data() {
    let server = create_test_server(false).await;

    let response = server.get("/notes").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "data": [] }));

    create_note(&server, "first", "1").await;
    create_note(&server, "second", "2").await;

    let notes = server.get("/notes").await.json::<ApiResponse<Vec<Note>>>().data;
    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn test_update_changes_text_only() {
    let server = create_test_server(false).await;
    let created = create_note(&server, "old title", "old content").await;

    let response = server
        .put(&format!("/notes/{}", created.id))
        .json(&json!({ "title": "new title", "content": "new content" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<ApiResponse<Note>>().data;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "new title");
    assert_eq!(updated.content, "new content");

    let fetched = server
        .get(&format!("/notes/{}", created.id))
        .await
        .json::<ApiResponse<Note>>()
        .data;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let server = create_test_server(false).await;
    let created = create_note(&server, "A", "B").await;

    let response = server.delete(&format!("/notes/{}", created.id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<ApiResponse<Note>>().data, created);

    let response = server.get(&format!("/notes/{}", created.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "NOT_FOUND");
    assert_eq!(body.code, 404);
}

#[tokio::test]
async fn test_count_tracks_create_and_delete() {
    let server = create_test_server(false).await;
    assert_eq!(note_count(&server).await, 0);

    let mut ids = Vec::new();
    for i in 0..3 {
        ids.push(create_note(&server, &format!("title {}", i), "body").await.id);
        assert_eq!(note_count(&server).await, i + 1);
    }

    for (removed, id) in ids.iter().enumerate() {
        server
            .delete(&format!("/notes/{}", id))
            .await
            .assert_status_ok();
        assert_eq!(note_count(&server).await, ids.len() - removed - 1);
    }
}

#[tokio::test]
async fn test_missing_ids_return_not_found() {
    let server = create_test_server(false).await;

    server
        .get("/notes/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .put("/notes/42")
        .json(&json!({ "title": "t", "content": "c" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/notes/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(note_count(&server).await, 0);
}

#[tokio::test]
async fn test_empty_fields_accepted_by_default() {
    let server = create_test_server(false).await;

    let created = create_note(&server, "", "").await;
    assert_eq!(created.title, "");
    assert_eq!(created.content, "");
}

#[tokio::test]
async fn test_validation_rejects_empty_fields_when_enabled() {
    let server = create_test_server(true).await;

    let response = server
        .post("/notes")
        .json(&json!({ "title": "", "content": "body" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "BAD_REQUEST");
    assert_eq!(body.message, "Title must not be empty");

    let response = server
        .post("/notes")
        .json(&json!({ "title": "   ", "content": "body" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let created = create_note(&server, "ok", "body").await;
    server
        .put(&format!("/notes/{}", created.id))
        .json(&json!({ "title": "ok", "content": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(note_count(&server).await, 1);
}

#[tokio::test]
async fn test_malformed_requests_are_rejected() {
    let server = create_test_server(false).await;

    server
        .get("/notes/not-a-number")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/notes")
        .json(&json!({ "title": "missing content" }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_health_and_info() {
    let server = create_test_server(false).await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    let response = server.get("/").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["endpoints"]["GET /notes"].is_string());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = create_test_server(false).await;

    let response = server.get("/notes").await;
    let request_id = response.header("x-request-id");
    assert_eq!(request_id.to_str().unwrap().len(), 36);

    let preflight = server
        .method(Method::OPTIONS, "/notes")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;
    preflight.assert_status_ok();
    assert_eq!(preflight.header("x-request-id").to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = create_test_server(false).await;

    let response = server
        .get("/notes")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
