//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_code;
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, info, warn};

/// Service for shortening URLs and resolving short codes.
///
/// There is no deduplication: shortening the same URL twice creates two
/// links with distinct codes.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Validates `url` and stores it as a new link.
    ///
    /// The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed; nothing is
    /// stored in that case.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, url: &str) -> Result<Link, AppError> {
        if let Err(e) = validate_url(url) {
            warn!(reason = %e, "Rejected URL");
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "url": url, "reason": e.to_string() }),
            ));
        }

        let link = self
            .link_repository
            .create(NewLink {
                original: url.to_string(),
            })
            .await?;

        info!(code = %link.short_code(), original = %link.original, "Link created");
        Ok(link)
    }

    /// Resolves a short code to its link.
    ///
    /// Codes that cannot be decoded are reported as not found without
    /// querying storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_code(&self, code: &str) -> Result<Link, AppError> {
        let not_found = || AppError::not_found("Short link not found", json!({ "code": code }));

        let Some(id) = short_code::decode(code) else {
            debug!(code, "Malformed short code");
            return Err(not_found());
        };

        match self.link_repository.find_by_id(id).await? {
            Some(link) => {
                debug!(code, "Short code resolved");
                Ok(link)
            }
            None => {
                debug!(code, "Short code not found");
                Err(not_found())
            }
        }
    }

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
