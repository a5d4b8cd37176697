//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                    - Create form
//! - `POST /`                    - Shorten a URL
//! - `GET  /link/{short_code}/`  - Link detail view
//! - `GET  /{short_code}/`       - Short link redirect
//! - `GET  /health`              - Health check
//!
//! Every request passes through [`crate::api::middleware::tracing`].

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
