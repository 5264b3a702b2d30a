//! Test helpers for the board API tests.
//!
//! Builds an in-process `TestServer` over the real router with a fresh store.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;
use tokio::sync::Mutex;

use anonboard::board::{BoardStore, SharedStore};
use anonboard::config::{PasswordConfig, WebConfig};
use anonboard::web::create_router;
use anonboard::web::handlers::AppState;

/// Create a test server backed by an empty store.
///
/// The store handle is returned so tests can inspect state directly.
pub fn create_test_server() -> (TestServer, SharedStore) {
    let store: SharedStore = Arc::new(Mutex::new(BoardStore::new()));
    let app_state = Arc::new(AppState::new(store.clone(), PasswordConfig::minimal()));
    let router = create_router(app_state, &WebConfig::default());
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, store)
}

/// Post a thread through the API and return its id.
///
/// New threads land at the front of the board listing.
pub async fn create_thread(server: &TestServer, board: &str, text: &str, password: &str) -> String {
    server
        .post(&format!("/api/threads/{}", board))
        .form(&[("text", text), ("delete_password", password)])
        .await
        .assert_status(axum::http::StatusCode::SEE_OTHER);

    let listing: Value = server.get(&format!("/api/threads/{}", board)).await.json();
    listing[0]["_id"]
        .as_str()
        .expect("thread id missing from listing")
        .to_string()
}

/// Post a reply through the API and return its id.
pub async fn create_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> String {
    server
        .post(&format!("/api/replies/{}", board))
        .form(&[
            ("thread_id", thread_id),
            ("text", text),
            ("delete_password", password),
        ])
        .await
        .assert_status(axum::http::StatusCode::SEE_OTHER);

    let detail = get_thread(server, board, thread_id).await;
    let replies = detail["replies"].as_array().expect("replies missing");
    replies
        .last()
        .and_then(|r| r["_id"].as_str())
        .expect("reply id missing")
        .to_string()
}

/// Fetch the full thread view.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> Value {
    let response = server
        .get(&format!("/api/replies/{}", board))
        .add_query_param("thread_id", thread_id)
        .await;
    response.assert_status_ok();
    response.json()
}

/// Fetch the board listing.
pub async fn list_threads(server: &TestServer, board: &str) -> Vec<Value> {
    let response = server.get(&format!("/api/threads/{}", board)).await;
    response.assert_status_ok();
    response.json()
}
