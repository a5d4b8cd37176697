//! Form payloads accepted by the HTML endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

/// Body of `POST /`.
///
/// `url` is optional at the decoding stage so that a missing field is
/// reported as an invalid URL instead of an extractor rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateLinkForm {
    #[validate(required(message = "URL is required"))]
    pub url: Option<String>,
}

impl CreateLinkForm {
    /// Returns the submitted URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the field is missing.
    pub fn into_url(self) -> Result<String, AppError> {
        self.validate()?;
        self.url
            .ok_or_else(|| AppError::bad_request("URL is required", serde_json::json!({})))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_url_present() {
        let form = CreateLinkForm {
            url: Some("https://example.org".to_string()),
        };

        assert_eq!(form.into_url().unwrap(), "https://example.org");
    }

    #[test]
    fn test_into_url_missing() {
        let err = CreateLinkForm::default().into_url().unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_error_info().details["fields"][0], "url");
    }
}
