//! Cross-category aggregation: turns a list of category slugs into one
//! deduplicated, recency-ordered article list, and splits it into the
//! digest sections downstream consumers expect.
//!
//! Network work fans out per feed; everything cross-feed (the dedup set,
//! category assignment, per-category caps, ordering) happens on a single
//! sequential merge path, so the output is deterministic for a given set
//! of feed responses.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use secrecy::SecretString;
use serde::Serialize;

use crate::article::Article;
use crate::feed::{self, FeedRegistry, ParsedFeed};
use crate::newsapi;

/// Upper bound on entries a single feed may contribute to a category.
pub const FEED_CANDIDATES: usize = 5;
/// How many feeds are fetched concurrently within one category.
const MAX_CONCURRENT_FETCHES: usize = 8;

/// Fetches, parses and freshness-filters one feed, capped at
/// [`FEED_CANDIDATES`] entries. Every failure mode degrades to an empty
/// contribution: the error is logged and the pipeline moves on.
async fn load_feed(client: &reqwest::Client, url: &str, now: DateTime<Utc>) -> ParsedFeed {
    let bytes = match feed::fetch_bytes(client, url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(feed = %url, error = %e, "feed fetch failed");
            return ParsedFeed::empty(url);
        }
    };
    let mut parsed = feed::parse_feed(&bytes, url);
    parsed.entries = feed::retain_fresh(parsed.entries, now);
    parsed.entries.truncate(FEED_CANDIDATES);
    parsed
}

/// Aggregates one category: concurrent fetch+parse over its registered
/// feeds, then a sequential merge in registry order through the shared
/// dedup set, stamping the category and stopping at `per_category`
/// records.
///
/// The ordered join is what keeps the merge deterministic — registry
/// order decides dedup winners and sort tie-breaks, not network timing.
async fn aggregate_category(
    client: &reqwest::Client,
    registry: &FeedRegistry,
    slug: &str,
    per_category: usize,
    now: DateTime<Utc>,
    seen: &mut HashSet<String>,
) -> Vec<Article> {
    if per_category == 0 {
        return Vec::new();
    }
    let urls = registry.feeds_for(slug);
    if urls.is_empty() {
        tracing::warn!(category = %slug, "no feeds registered for category");
        return Vec::new();
    }

    let feeds: Vec<ParsedFeed> = stream::iter(urls.iter().map(|url| load_feed(client, url, now)))
        .buffered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    let mut articles = Vec::new();
    'feeds: for parsed in feeds {
        for entry in parsed.entries {
            if seen.contains(&entry.url) {
                continue;
            }
            let Some(article) = Article::new(
                entry.title,
                entry.url,
                entry.summary,
                parsed.source.clone(),
                entry.published,
                slug,
            ) else {
                continue;
            };
            seen.insert(article.url.clone());
            articles.push(article);
            if articles.len() >= per_category {
                break 'feeds;
            }
        }
    }
    articles
}

/// Runs the full pipeline for the requested categories.
///
/// Never fails: a run where every source errors returns an empty list.
/// One dedup set is threaded through the categories (in request order)
/// and then the secondary source, so the first category to produce a URL
/// owns it and no URL appears twice in the output.
///
/// `headlines_base` overrides the secondary provider endpoint for tests;
/// `None` uses the production endpoint.
pub async fn collect_articles(
    client: &reqwest::Client,
    registry: &FeedRegistry,
    categories: &[String],
    per_category: usize,
    news_api_key: Option<&SecretString>,
    headlines_base: Option<&str>,
) -> Vec<Article> {
    let now = Utc::now();
    let mut seen: HashSet<String> = HashSet::new();
    let mut articles: Vec<Article> = Vec::new();

    for slug in categories {
        let batch = aggregate_category(client, registry, slug, per_category, now, &mut seen).await;
        tracing::info!(category = %slug, count = batch.len(), "aggregated category");
        articles.extend(batch);
    }

    if let Some(key) = news_api_key {
        if !categories.is_empty() {
            let extra =
                newsapi::fetch_headlines(client, categories, key, headlines_base, &mut seen).await;
            tracing::info!(count = extra.len(), "merged secondary headlines");
            articles.extend(extra);
        }
    }

    sort_by_recency(&mut articles);
    articles
}

/// Newest first; undated records sink to the end. The sort is stable, so
/// ties keep category-then-feed encounter order.
fn sort_by_recency(articles: &mut [Article]) {
    articles.sort_by_key(|a| Reverse(a.published.unwrap_or(DateTime::<Utc>::MIN_UTC)));
}

/// The hand-off shape for downstream consumers (renderer, mailer): the
/// ordered article list split into top stories and shorter quick hits.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub generated_at: DateTime<Utc>,
    pub top_stories: Vec<Article>,
    pub quick_hits: Vec<Article>,
}

impl Digest {
    /// Splits an ordered article list into the first `max_top` top stories
    /// and the next `max_quick` quick hits; anything beyond is dropped.
    pub fn assemble(mut articles: Vec<Article>, max_top: usize, max_quick: usize) -> Self {
        let split = articles.len().min(max_top);
        let top_stories: Vec<Article> = articles.drain(..split).collect();
        articles.truncate(max_quick);
        Self {
            generated_at: Utc::now(),
            top_stories,
            quick_hits: articles,
        }
    }
}
