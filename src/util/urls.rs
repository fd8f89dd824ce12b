use thiserror::Error;
use url::Url;

/// Errors from validating a feed or provider URL.
#[derive(Debug, Error)]
pub enum UrlError {
    /// The URL string could not be parsed.
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Validates a URL before any network use.
///
/// Every URL the pipeline fetches comes from the fixed builtin registry or
/// a configured provider base, so validation is a scheme allow-list rather
/// than the full hostile-input screening a user-supplied URL would need.
pub fn validate_feed_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(UrlError::UnsupportedScheme(scheme.to_owned())),
    }
}
