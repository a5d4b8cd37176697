//! Link detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State, rejection::PathRejection};

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the link detail page.
///
/// `link` is `None` when the short code does not resolve; the template then
/// renders its "no link" state.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "show.html")]
pub struct ShowTemplate {
    pub link: Option<Link>,
}

/// Shows the link behind a short code without redirecting.
///
/// # Endpoint
///
/// `GET /link/{short_code}/`
///
/// Unknown or malformed codes, including segments that do not
/// percent-decode to UTF-8, render the same page with no link and
/// status 200.
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn show_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<ShowTemplate, AppError> {
    let Ok(Path(short_code)) = path.inspect_err(|e| {
        tracing::debug!(error = %e, "Undecodable short code");
    }) else {
        return Ok(ShowTemplate { link: None });
    };

    let link = match state.link_service.find_by_code(&short_code).await {
        Ok(link) => Some(link),
        Err(e) if e.is_not_found() => None,
        Err(e) => return Err(e),
    };

    Ok(ShowTemplate { link })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_link() {
        let template = ShowTemplate {
            link: Some(Link::new(3, "https://example.org".to_string())),
        };
        let html = template.render().unwrap();

        assert!(html.contains(r#"href="/3/""#));
        assert!(html.contains("https://example.org"));
        assert!(!html.contains("no-link"));
    }

    #[test]
    fn test_renders_missing_link() {
        let html = ShowTemplate { link: None }.render().unwrap();

        assert!(html.contains("no-link"));
    }
}
