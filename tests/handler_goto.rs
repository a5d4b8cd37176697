mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test]
async fn test_goto_existing_link_redirects_to_original(pool: PgPool) {
    let id = common::create_test_link(&pool, "https://example.org").await;
    let server = common::create_test_server(pool);

    let response = server.get(&format!("/{id}/")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.org");
}

#[sqlx::test]
async fn test_goto_nonexistent_link_redirects_to_create(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/999/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[sqlx::test]
async fn test_goto_malformed_code_redirects_to_create(pool: PgPool) {
    let server = common::create_test_server(pool);

    for path in ["/abc/", "/-1/", "/99999999999999999999/"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");
    }
}

#[sqlx::test]
async fn test_created_link_round_trips_through_goto(pool: PgPool) {
    let server = common::create_test_server(pool);
    let original = "https://docs.djangoproject.com/en/2.0/";

    let created = server.post("/").form(&[("url", original)]).await;
    let show_path = created.header("location");
    let code = show_path
        .to_str()
        .unwrap()
        .trim_start_matches("/link/")
        .trim_end_matches('/')
        .to_string();

    let response = server.get(&format!("/{code}/")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), original);
}

#[sqlx::test]
async fn test_goto_undecodable_code_redirects_to_create(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/%FF/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[sqlx::test]
async fn test_goto_non_ascii_link_sends_encoded_location(pool: PgPool) {
    let id = common::create_test_link(&pool, "https://bücher.de/").await;
    let server = common::create_test_server(pool);

    let response = server.get(&format!("/{id}/")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://xn--bcher-kva.de/");
}

#[sqlx::test]
async fn test_goto_leading_zero_code_redirects_to_create(pool: PgPool) {
    common::create_test_link(&pool, "https://example.org").await;
    let server = common::create_test_server(pool);

    let response = server.get("/01/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}
