//! Optional top-headlines augmentation from an external news API.
//!
//! Only a fixed subset of category slugs maps onto the provider's own
//! vocabulary; everything else is skipped silently. Failures never
//! escalate past this module — a category whose query errors contributes
//! nothing, and the primary feed results are never at risk.

use std::collections::HashSet;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::article::Article;
use crate::feed::parse_date;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";
const PAGE_SIZE: &str = "5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
enum ProviderError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Maps a digest category slug onto the provider's category vocabulary.
/// Unmapped slugs are not queried at all.
fn provider_category(slug: &str) -> Option<&'static str> {
    match slug {
        "technology" => Some("technology"),
        "business" => Some("business"),
        "science" => Some("science"),
        "health" => Some("health"),
        "sports" => Some("sports"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<HeadlineItem>,
}

#[derive(Debug, Deserialize)]
struct HeadlineItem {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    source: Option<HeadlineSource>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeadlineSource {
    name: Option<String>,
}

/// Queries the provider once per distinct mapped category and merges the
/// results through the shared dedup set, so secondary items never collide
/// with primary-feed URLs. Per-category failures are logged and skipped.
///
/// `base_url` overrides the production endpoint for tests.
pub async fn fetch_headlines(
    client: &reqwest::Client,
    slugs: &[String],
    api_key: &SecretString,
    base_url: Option<&str>,
    seen: &mut HashSet<String>,
) -> Vec<Article> {
    let base = base_url.unwrap_or(DEFAULT_BASE_URL);
    let mut queried: HashSet<&str> = HashSet::new();
    let mut articles = Vec::new();

    for slug in slugs {
        let Some(category) = provider_category(slug) else {
            continue;
        };
        if !queried.insert(category) {
            continue;
        }

        let items = match query_category(client, base, category, api_key).await {
            Ok(items) => items,
            Err(ProviderError::HttpStatus(status)) => {
                tracing::debug!(
                    category = %category,
                    status = status,
                    "headlines query rejected, skipping category"
                );
                continue;
            }
            Err(e) => {
                tracing::warn!(category = %category, error = %e, "headlines query failed");
                continue;
            }
        };

        for item in items {
            let Some(url) = item.url.filter(|u| !u.trim().is_empty()) else {
                continue;
            };
            if seen.contains(&url) {
                continue;
            }
            let source = item
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "NewsAPI".to_string());
            let published = item.published_at.as_deref().and_then(parse_date);
            let Some(article) = Article::new(
                item.title.unwrap_or_default(),
                url,
                item.description.unwrap_or_default(),
                source,
                published,
                slug.as_str(),
            ) else {
                continue;
            };
            seen.insert(article.url.clone());
            articles.push(article);
        }
    }

    articles
}

async fn query_category(
    client: &reqwest::Client,
    base: &str,
    category: &str,
    api_key: &SecretString,
) -> Result<Vec<HeadlineItem>, ProviderError> {
    let response = tokio::time::timeout(
        REQUEST_TIMEOUT,
        client
            .get(format!("{base}/v2/top-headlines"))
            .query(&[
                ("category", category),
                ("language", "en"),
                ("pageSize", PAGE_SIZE),
                ("apiKey", api_key.expose_secret()),
            ])
            .send(),
    )
    .await
    .map_err(|_| ProviderError::Timeout)?
    .map_err(ProviderError::Network)?;

    if !response.status().is_success() {
        return Err(ProviderError::HttpStatus(response.status().as_u16()));
    }

    let bytes = response.bytes().await.map_err(ProviderError::Network)?;
    let parsed: HeadlinesResponse = serde_json::from_slice(&bytes)?;
    Ok(parsed.articles)
}
