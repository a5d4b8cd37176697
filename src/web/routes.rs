//! HTML route configuration.

use axum::{Router, routing::get};

use crate::state::AppState;
use crate::web::handlers::{create_form_handler, create_submit_handler, goto_handler, show_handler};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /`                    - Create form
/// - `POST /`                    - Shorten a URL
/// - `GET  /link/{short_code}/`  - Link detail view
/// - `GET  /{short_code}/`       - Redirect to the original URL
///
/// Paths keep their trailing slash; `/link/1` and `/1` do not match.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(create_form_handler).post(create_submit_handler))
        .route("/link/{short_code}/", get(show_handler))
        .route("/{short_code}/", get(goto_handler))
}
