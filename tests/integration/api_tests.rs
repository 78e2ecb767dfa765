//! API integration tests
//!
//! These run against a live server with a seeded database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_author_list() {
    let client = Client::new();

    let response = client
        .get(format!("{}/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let text = response.text().await.expect("Failed to read response");
    if text == "No authors found" {
        return; // empty catalog
    }

    let body: Vec<String> = serde_json::from_str(&text).expect("Failed to parse response");
    // Every summary carries the fixed " : " and " - " separators.
    for summary in &body {
        assert!(summary.contains(" : "), "malformed summary: {summary:?}");
        assert!(summary.contains(" - "), "malformed summary: {summary:?}");
    }
}

#[tokio::test]
#[ignore]
async fn test_books_status() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/status", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    for copy in body.as_array().expect("expected an array") {
        assert_eq!(copy["status"], "Available");
        assert!(copy["book"]["title"].is_string());
    }
}
