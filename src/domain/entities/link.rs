//! Link entity representing a shortened URL mapping.

use crate::utils::short_code;

/// A stored mapping from a short code to an original URL.
///
/// The `id` is assigned by the database on insert and never changes.
/// Its encoded form is the public short code (see [`Link::short_code`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, original: String) -> Self {
        Self { id, original }
    }

    /// Returns the public short code for this link.
    pub fn short_code(&self) -> String {
        short_code::encode(self.id)
    }

    /// Path of the redirect endpoint for this link, e.g. `/42/`.
    pub fn goto_path(&self) -> String {
        format!("/{}/", self.short_code())
    }

    /// Path of the detail view for this link, e.g. `/link/42/`.
    pub fn show_path(&self) -> String {
        format!("/link/{}/", self.short_code())
    }
}

/// Input data for creating a new link.
///
/// Carries an already validated URL; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original: String,
}
