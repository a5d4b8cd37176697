use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repository into the link service.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }
}
