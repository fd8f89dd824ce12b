use crate::util::validate_feed_url;
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;

/// Hard ceiling on a single feed retrieval, covering connect, send, and
/// body read.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors from a single feed retrieval.
///
/// Callers absorb every variant as "zero articles from this source";
/// nothing here aborts a pipeline run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded [`FETCH_TIMEOUT`]
    #[error("request timed out")]
    Timeout,
    /// Response body exceeded the size limit
    #[error("response too large")]
    ResponseTooLarge,
    /// URL failed scheme validation before any network call
    #[error("invalid feed URL: {0}")]
    InvalidUrl(String),
}

/// Retrieves the raw bytes of one feed document.
///
/// One GET, no retries: the registry lists several independent feeds per
/// category, and a failed source simply contributes nothing this run.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    validate_feed_url(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    tokio::time::timeout(FETCH_TIMEOUT, async {
        let response = client.get(url).send().await.map_err(FetchError::Network)?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }
        read_limited_bytes(response, MAX_FEED_SIZE).await
    })
    .await
    .map_err(|_| FetchError::Timeout)?
}

/// Streams the response body with a size cap, so a misbehaving feed cannot
/// exhaust memory.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
