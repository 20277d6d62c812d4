mod common;

use axum::http::StatusCode;
use link_registry::domain::repositories::LinkRepository;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_new_url_returns_created() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert!(json["id"].is_i64());
    assert_eq!(json["originalUrl"], "https://example.com");
    assert_eq!(json["clicks"], 0);
    assert!(json["createdAt"].is_string());
    assert!(json.get("message").is_none());

    let code = json["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_existing_url_returns_ok_with_message() {
    let (server, _repo) = common::create_test_server();

    let first = common::shorten(&server, "https://dedup.com").await;

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://dedup.com" }))
        .await;

    response.assert_status_ok();

    let second = response.json::<Value>();
    assert_eq!(second["shortCode"], first["shortCode"]);
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["message"], "URL already shortened");
}

#[tokio::test]
async fn test_shorten_different_urls_get_different_codes() {
    let (server, _repo) = common::create_test_server();

    let a = common::shorten(&server, "https://example.com/1").await;
    let b = common::shorten(&server, "https://example.com/2").await;

    assert_ne!(a["shortCode"], b["shortCode"]);
    assert_ne!(a["id"], b["id"]);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (server, _repo) = common::create_test_server();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_whitespace_url() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "   " }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "originalUrl is required");
}

#[tokio::test]
async fn test_shorten_accepts_any_non_empty_string() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "example.com/no-scheme" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_shorten_without_body() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/api/shorten").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "originalUrl");
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_non_string_url() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": 123 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_non_json_body() {
    let (server, _repo) = common::create_test_server();

    let response = server.post("/api/shorten").text("originalUrl=x").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}
