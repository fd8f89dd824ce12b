use chrono::{DateTime, Utc};
use serde::Serialize;

/// A normalized article — the one entity the aggregation pipeline emits.
///
/// `published` doubles as the recency sort key while the pipeline runs and
/// serializes as an ISO-8601 timestamp on output. `hook` and `takeaway`
/// stay `None` until the summarizer fills them in; downstream consumers
/// read everything else as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    /// Canonical link; the global dedup key for the whole pipeline run.
    pub url: String,
    /// Plain text, HTML stripped and capped at parse time. May be empty.
    pub summary: String,
    /// Human-readable feed/channel title, or the feed URL when absent.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    /// The category slug this article was claimed under.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<String>,
}

impl Article {
    /// Builds an article, enforcing the record invariant at construction:
    /// both title and URL must be non-empty after trimming. Returns `None`
    /// for records that would violate it.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        summary: impl Into<String>,
        source: impl Into<String>,
        published: Option<DateTime<Utc>>,
        category: impl Into<String>,
    ) -> Option<Self> {
        let title: String = title.into();
        let url: String = url.into();
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            url: url.to_string(),
            summary: summary.into(),
            source: source.into(),
            published,
            category: category.into(),
            hook: None,
            takeaway: None,
        })
    }
}
