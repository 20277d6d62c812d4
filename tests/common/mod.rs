#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use link_registry::domain::repositories::LinkRepository;
use link_registry::infrastructure::persistence::MemoryLinkRepository;
use link_registry::routes::router;
use link_registry::state::AppState;

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone() as Arc<dyn LinkRepository>);

    (state, repo)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    (server, repo)
}

pub async fn shorten(server: &TestServer, url: &str) -> Value {
    server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": url }))
        .await
        .json::<Value>()
}

pub async fn insert_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (original_url, short_code) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}
