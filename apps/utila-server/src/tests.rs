//! HTTP endpoint tests for the UTILA server
//!
//! Runs the full router against an in-memory SQLite database via axum-test.

use std::path::Path;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;

use crate::models::ContactMessage;
use crate::state::AppState;

/// State backed by a fresh in-memory database.
///
/// A single pooled connection keeps every query on the same in-memory
/// database; separate connections would each see their own empty one.
async fn test_state() -> Arc<AppState> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    AppState::run_migrations(&pool).await.expect("migrations");
    Arc::new(AppState { db: pool })
}

fn test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(crate::router(state, Path::new("dist"))).unwrap()
}

async fn stored_messages(state: &AppState) -> Vec<ContactMessage> {
    sqlx::query_as("SELECT id, name, email, message, created_at FROM contact_messages ORDER BY id")
        .fetch_all(&state.db)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_returns_200() {
    let server = test_server(test_state().await);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "utila-server");
}

#[tokio::test]
async fn test_contact_valid_submission_persists_one_row() {
    let state = test_state().await;
    let server = test_server(state.clone());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Alice",
            "email": "a@b.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Message received! We will get back to you soon."
    );

    let rows = stored_messages(&state).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].email, "a@b.com");
    assert_eq!(rows[0].message, "Hello");
    // The timestamp is assigned by the database at insert time.
    assert!(rows[0].created_at.and_utc().timestamp() > 0);
}

#[tokio::test]
async fn test_contact_empty_field_is_rejected_and_not_persisted() {
    let state = test_state().await;
    let server = test_server(state.clone());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "",
            "email": "a@b.com",
            "message": "hi"
        }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "All fields are required");

    assert!(stored_messages(&state).await.is_empty());
}

#[tokio::test]
async fn test_contact_missing_field_is_rejected() {
    let server = test_server(test_state().await);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Alice",
            "email": "a@b.com"
        }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn test_contact_accepts_whitespace_only_fields() {
    // Validation is deliberately permissive: only truly empty strings fail.
    let state = test_state().await;
    let server = test_server(state.clone());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": " ",
            "email": "not-an-email",
            "message": "x"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(stored_messages(&state).await.len(), 1);
}

#[tokio::test]
async fn test_contact_storage_failure_returns_generic_500() {
    let state = test_state().await;
    let server = test_server(state.clone());

    // Simulate the storage backend going away.
    state.db.close().await;

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Alice",
            "email": "a@b.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Failed to save message");
}

#[tokio::test]
async fn test_concurrent_submissions_get_distinct_ids() {
    let state = test_state().await;
    let server = test_server(state.clone());

    let first = server.post("/api/contact").json(&json!({
        "name": "Alice",
        "email": "a@b.com",
        "message": "first"
    }));
    let second = server.post("/api/contact").json(&json!({
        "name": "Bob",
        "email": "b@c.com",
        "message": "second"
    }));

    let (r1, r2) = tokio::join!(first, second);
    r1.assert_status_ok();
    r2.assert_status_ok();

    let rows = stored_messages(&state).await;
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
}

#[tokio::test]
async fn test_submissions_are_never_deduplicated() {
    let state = test_state().await;
    let server = test_server(state.clone());

    let payload = json!({
        "name": "Alice",
        "email": "a@b.com",
        "message": "same message"
    });
    server.post("/api/contact").json(&payload).await.assert_status_ok();
    server.post("/api/contact").json(&payload).await.assert_status_ok();

    assert_eq!(stored_messages(&state).await.len(), 2);
}

#[tokio::test]
async fn test_list_tools_returns_full_catalog() {
    let server = test_server(test_state().await);

    let response = server.get("/api/tools").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 23);
}

#[tokio::test]
async fn test_list_tools_filters_by_category() {
    let server = test_server(test_state().await);

    let response = server.get("/api/tools").add_query_param("category", "Image").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 5);
    for tool in body["tools"].as_array().unwrap() {
        assert_eq!(tool["category"], "Image");
    }
}

#[tokio::test]
async fn test_list_tools_search_is_case_insensitive() {
    let server = test_server(test_state().await);

    let upper = server.get("/api/tools").add_query_param("q", "PDF").await;
    let lower = server.get("/api/tools").add_query_param("q", "pdf").await;

    assert_eq!(
        upper.json::<serde_json::Value>()["tools"],
        lower.json::<serde_json::Value>()["tools"]
    );
}

#[tokio::test]
async fn test_list_tools_rejects_unknown_category() {
    let server = test_server(test_state().await);

    let response = server.get("/api/tools").add_query_param("category", "Gadgets").await;
    response.assert_status_bad_request();
}
