mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    common::create_test_link(&pool, "https://example.org").await;
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 1 links stored"
    );
}

#[sqlx::test]
async fn test_health_endpoint_degraded_when_database_closed(pool: PgPool) {
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
