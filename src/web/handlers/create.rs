//! Create form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::form::CreateLinkForm;

/// Template for the create form.
///
/// Renders `templates/create.html` with:
/// - URL input, pre-filled with the rejected value
/// - Error message when `invalid_url` is set
#[derive(Debug, Default, Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub invalid_url: bool,
    pub url: String,
}

impl CreateTemplate {
    /// Form state after a rejected submission.
    pub fn invalid(url: impl Into<String>) -> Self {
        Self {
            invalid_url: true,
            url: url.into(),
        }
    }
}

/// Renders the empty create form.
///
/// # Endpoint
///
/// `GET /`
pub async fn create_form_handler() -> CreateTemplate {
    CreateTemplate::default()
}

/// Shortens the submitted URL.
///
/// # Endpoint
///
/// `POST /` with form field `url`
///
/// # Responses
///
/// - **303 See Other** to `/link/{code}/` when the link is created
/// - **422 Unprocessable Entity** rendering the form with `invalid_url`
///   when the URL is missing or malformed; nothing is stored
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn create_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> Result<Response, AppError> {
    let url = match form.into_url() {
        Ok(url) => url,
        Err(e) => {
            debug!(error = %e, "Create form rejected");
            return Ok(reject(String::new()));
        }
    };

    match state.link_service.shorten(&url).await {
        Ok(link) => Ok(Redirect::to(&link.show_path()).into_response()),
        Err(e) if e.is_validation() => Ok(reject(url)),
        Err(e) => Err(e),
    }
}

fn reject(url: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        CreateTemplate::invalid(url),
    )
        .into_response()
}
