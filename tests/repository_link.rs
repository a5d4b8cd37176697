mod common;

use link_shortener::domain::entities::NewLink;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let new_link = NewLink {
        original: "https://example.org".to_string(),
    };

    let link = repo.create(new_link).await.unwrap();

    assert_eq!(link.id, 1);
    assert_eq!(link.original, "https://example.org");
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_test_link(&pool, "https://example.org/page").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_id(id).await.unwrap();

    assert!(link.is_some());
    assert_eq!(link.unwrap().original, "https://example.org/page");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999).await;

    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    common::create_test_link(&pool, "https://example.org/1").await;
    common::create_test_link(&pool, "https://example.org/2").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_concurrent_creates_get_distinct_ids(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let mut tasks = JoinSet::new();

    for i in 0..20 {
        let repo = repo.clone();
        tasks.spawn(async move {
            repo.create(NewLink {
                original: format!("https://example.org/{i}"),
            })
            .await
            .unwrap()
            .id
        });
    }

    let mut ids = HashSet::new();
    while let Some(id) = tasks.join_next().await {
        assert!(ids.insert(id.unwrap()));
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(repo.count().await.unwrap(), 20);
}

#[sqlx::test]
async fn test_ids_are_not_reused(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let first = repo
        .create(NewLink {
            original: "https://example.org/a".to_string(),
        })
        .await
        .unwrap();

    sqlx::query("DELETE FROM links WHERE id = $1")
        .bind(first.id)
        .execute(&pool)
        .await
        .unwrap();

    let second = repo
        .create(NewLink {
            original: "https://example.org/b".to_string(),
        })
        .await
        .unwrap();

    assert!(second.id > first.id);
}
