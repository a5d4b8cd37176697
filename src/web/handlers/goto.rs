//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::redirect_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}/`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the original URL when the code resolves
/// - **303 See Other** to `/` when the code is unknown or malformed,
///   including segments that do not percent-decode to UTF-8
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn goto_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let Ok(Path(short_code)) = path.inspect_err(|e| {
        tracing::debug!(error = %e, "Undecodable short code");
    }) else {
        return Ok(Redirect::to("/"));
    };

    match state.link_service.find_by_code(&short_code).await {
        Ok(link) => Ok(Redirect::temporary(&redirect_location(&link.original))),
        Err(e) if e.is_not_found() => Ok(Redirect::to("/")),
        Err(e) => Err(e),
    }
}
