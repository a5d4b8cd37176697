#![allow(dead_code)]

use axum_test::TestServer;
use link_shortener::routes::app_router;
use link_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_link(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO links (original) VALUES ($1) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn find_original(pool: &PgPool, id: i64) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT original FROM links WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Full application router, as served in production.
pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}
