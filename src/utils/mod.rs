//! Helper functions used across the application:
//!
//! - [`short_code`] - Link id to short code conversion
//! - [`url_validator`] - URL syntax validation

pub mod short_code;
pub mod url_validator;
