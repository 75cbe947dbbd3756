//! API integration tests against a server bound to an ephemeral port

use bookshelf_server::{api, models::seed_books, repository::Repository, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a freshly seeded server and return its base URL
async fn spawn_app() -> String {
    let state = AppState::new(AppConfig::default(), Repository::new(seed_books()));
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["books"], 7);
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert_eq!(books.len(), 7);
    assert_eq!(
        books[1],
        json!({"id": "2", "book_name": "Wealth of Nations", "author": "Adam Smith"})
    );
}

#[tokio::test]
async fn test_get_then_delete_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"id": "1", "book_name": "The India Story", "author": "Bimal Jalal"})
    );

    let response = client
        .delete(format!("{}/books/delete?id=1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Book not found");

    // Second delete of the same id
    let response = client
        .delete(format!("{}/books/delete?id=1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_missing_book() {
    let base = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/books/999", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books/add", base))
        .json(&json!({"id": "9", "book_name": "Test", "author": "X"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.text().await.unwrap().is_empty());

    let body: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let matches = body
        .as_array()
        .expect("Expected an array")
        .iter()
        .filter(|b| b["id"] == "9")
        .count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn test_add_book_without_content_type() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books/add", base))
        .body(r#"{"id":"10","book_name":"Plain","author":"Y"}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .get(format!("{}/books/10", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_book_malformed_json() {
    let base = spawn_app().await;

    let response = Client::new()
        .post(format!("{}/books/add", base))
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/update?id=2", base))
        .json(&json!({"id": "2", "book_name": "New Title", "author": "New Author"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = client
        .get(format!("{}/books/2", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["book_name"], "New Title");
    assert_eq!(body["author"], "New Author");
}

#[tokio::test]
async fn test_update_book_errors() {
    let base = spawn_app().await;
    let client = Client::new();

    // Missing id is reported before the body is decoded
    let response = client
        .put(format!("{}/books/update", base))
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "ID not provided");

    let response = client
        .put(format!("{}/books/update?id=", base))
        .json(&json!({"id": "2"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .put(format!("{}/books/update?id=2", base))
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .put(format!("{}/books/update?id=999", base))
        .json(&json!({"id": "999", "book_name": "Nope", "author": "Nobody"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_without_id() {
    let base = spawn_app().await;

    let response = Client::new()
        .delete(format!("{}/books/delete", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "ID not provided");
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/api-docs/openapi.json", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/books/{id}"].is_object());
}
