//! "Smart brevity" enrichment of top stories via the Anthropic Messages
//! API: a one-sentence hook, a rewritten summary, and a key takeaway per
//! article. Entirely optional — without a key the digest ships with the
//! parsed feed summaries.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::article::Article;
use crate::util::truncate_chars;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MODEL: &str = "claude-haiku-4-5";
const MAX_TOKENS: u32 = 512;
const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Longest article snippet forwarded to the model, in characters.
const SNIPPET_MAX_CHARS: usize = 1500;

const SYSTEM_PROMPT: &str = "You are a newsletter editor for a high-quality personalized news \
digest, similar to Morning Brew or Axios. Your job is to summarize articles in a concise, \
engaging way for a general but informed audience.\n\n\
For each article you must produce:\n\
1. A one-sentence \"hook\" explaining why this matters to the reader.\n\
2. A 2-3 sentence summary of what happened / what the article covers.\n\
3. A one-sentence \"key takeaway\" — the single most important insight.\n\n\
Keep language clear, active, and jargon-free. Do not editorialize beyond the article's \
content. Do not use bullet points in your output — write short prose paragraphs.";

#[derive(Debug, Error)]
enum SummarizeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("malformed request or response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response contained no text block")]
    EmptyResponse,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Enrichment {
    #[serde(default)]
    hook: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    takeaway: String,
}

/// Enriches the first `max_articles` records in place.
///
/// Without an API key the pass is skipped entirely (articles keep their
/// parsed summaries and `hook`/`takeaway` stay absent). A per-article
/// failure keeps that article's original summary and moves on; titles and
/// URLs are never touched. `base_url` overrides the production endpoint
/// for tests.
pub async fn enrich_articles(
    client: &reqwest::Client,
    articles: &mut [Article],
    api_key: Option<&SecretString>,
    base_url: Option<&str>,
    max_articles: usize,
) {
    let Some(key) = api_key else {
        tracing::warn!("no summarization API key configured, skipping enrichment");
        return;
    };
    let base = base_url.unwrap_or(DEFAULT_BASE_URL);

    for article in articles.iter_mut().take(max_articles) {
        match summarize_one(client, base, key, article).await {
            Ok(enrichment) => {
                if !enrichment.summary.trim().is_empty() {
                    article.summary = enrichment.summary;
                }
                article.hook = Some(enrichment.hook);
                article.takeaway = Some(enrichment.takeaway);
            }
            Err(e) => {
                tracing::warn!(title = %article.title, error = %e, "summarization failed");
            }
        }
    }
}

fn build_prompt(article: &Article) -> String {
    let snippet = if article.summary.trim().is_empty() {
        article.title.as_str()
    } else {
        truncate_chars(&article.summary, SNIPPET_MAX_CHARS)
    };
    format!(
        "Please summarize the following article.\n\n\
         Title: {}\n\
         Source: {}\n\
         URL: {}\n\n\
         Article snippet:\n{}\n\n\
         ---\n\
         Return ONLY a JSON object with these exact keys:\n\
         {{\n  \"hook\": \"...\",\n  \"summary\": \"...\",\n  \"takeaway\": \"...\"\n}}",
        article.title, article.source, article.url, snippet
    )
}

async fn summarize_one(
    client: &reqwest::Client,
    base: &str,
    api_key: &SecretString,
    article: &Article,
) -> Result<Enrichment, SummarizeError> {
    let request = MessagesRequest {
        model: MODEL,
        max_tokens: MAX_TOKENS,
        system: SYSTEM_PROMPT,
        messages: vec![Message {
            role: "user",
            content: build_prompt(article),
        }],
    };
    let body = serde_json::to_vec(&request)?;

    let response = tokio::time::timeout(
        REQUEST_TIMEOUT,
        client
            .post(format!("{base}/v1/messages"))
            .header("x-api-key", api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .body(body)
            .send(),
    )
    .await
    .map_err(|_| SummarizeError::Timeout)?
    .map_err(SummarizeError::Network)?;

    if !response.status().is_success() {
        return Err(SummarizeError::HttpStatus(response.status().as_u16()));
    }

    let bytes = response.bytes().await.map_err(SummarizeError::Network)?;
    let parsed: MessagesResponse = serde_json::from_slice(&bytes)?;
    let text = parsed
        .content
        .into_iter()
        .find_map(|block| block.text)
        .ok_or(SummarizeError::EmptyResponse)?;

    let enrichment: Enrichment = serde_json::from_str(strip_code_fences(&text))?;
    Ok(enrichment)
}

/// Models occasionally wrap the JSON object in a markdown code fence;
/// unwrap it before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let raw = raw.trim();
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.find("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}
