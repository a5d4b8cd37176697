//! PostgreSQL-backed [`LinkRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    original: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.original)
    }
}

/// Link repository over the `links` table.
///
/// Ids come from the `BIGSERIAL` sequence via `INSERT ... RETURNING`, so
/// assignment is atomic across concurrent writers.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "INSERT INTO links (original) VALUES ($1) RETURNING id, original",
        )
        .bind(&new_link.original)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>("SELECT id, original FROM links WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(AppError::from)
    }
}
