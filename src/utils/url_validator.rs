//! URL syntax validation for submitted links.
//!
//! Submitted URLs are stored exactly as given, so validation only checks
//! them. [`redirect_location`] produces the header-safe form used when
//! redirecting.

use url::{Host, Url};

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 200;

/// Schemes a stored link may use.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not contain whitespace or control characters")]
    ContainsWhitespace,

    #[error("URL is longer than {} characters", MAX_URL_LENGTH)]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Host must be a dotted domain name, localhost, or an IP address: {0}")]
    InvalidHost(String),
}

/// Checks that `input` is an absolute URL with a supported scheme and host.
///
/// # Rules
///
/// 1. Non-empty, no whitespace or control characters anywhere
/// 2. At most [`MAX_URL_LENGTH`] characters
/// 3. Parses as an absolute URL
/// 4. Scheme is one of [`ALLOWED_SCHEMES`]
/// 5. Host is an IP address, `localhost`, or a domain with a top-level
///    label (`example.org`, not `foo`)
///
/// # Errors
///
/// Returns the first rule that fails as a [`UrlValidationError`].
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.org").is_ok());
/// assert!(validate_url("not a valid url").is_err());
/// assert!(validate_url("http://foo").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // Url::parse silently strips tabs and newlines, so check the raw input.
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::ContainsWhitespace);
    }

    if input.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    match url.host() {
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if domain.is_empty() => Err(UrlValidationError::MissingHost),
        Some(Host::Domain(domain)) if is_valid_domain(domain) => Ok(()),
        Some(Host::Domain(domain)) => Err(UrlValidationError::InvalidHost(domain.to_string())),
        None => Err(UrlValidationError::MissingHost),
    }
}

/// `localhost`, or a name whose last label is a top-level domain: two or
/// more letters/hyphens, or an `xn--` punycode label.
fn is_valid_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let tld_ok = if let Some(rest) = tld.strip_prefix("xn--") {
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric())
    } else {
        tld.len() >= 2
            && tld.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
            && !tld.starts_with('-')
            && !tld.ends_with('-')
    };

    tld_ok && !name.is_empty() && name.split('.').all(|label| !label.is_empty())
}

/// Returns the value to send in a `Location` header for a stored URL.
///
/// ASCII URLs are returned unchanged. Anything else is re-serialized by
/// the URL parser, which punycodes the host and percent-encodes the rest.
pub fn redirect_location(original: &str) -> String {
    if original.is_ascii() {
        return original.to_string();
    }

    Url::parse(original)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| original.to_string())
}
