use chrono::{DateTime, Duration, Utc};

use super::parser::ParsedEntry;

/// Entries older than this are dropped right after parsing.
pub const MAX_ARTICLE_AGE_HOURS: i64 = 48;

/// Keeps entries recent enough relative to `now`, applied per feed before
/// any cross-feed merging.
///
/// Entries without a date always pass: a source that omits dates should
/// degrade to "assumed fresh", not vanish from the digest. The boundary is
/// inclusive — an entry published exactly at the cutoff is retained.
pub fn retain_fresh(entries: Vec<ParsedEntry>, now: DateTime<Utc>) -> Vec<ParsedEntry> {
    let cutoff = now - Duration::hours(MAX_ARTICLE_AGE_HOURS);
    entries
        .into_iter()
        .filter(|entry| entry.published.map_or(true, |published| published >= cutoff))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(published: Option<DateTime<Utc>>) -> ParsedEntry {
        ParsedEntry {
            title: "Title".to_string(),
            url: "https://example.com/a".to_string(),
            summary: String::new(),
            published,
        }
    }

    #[test]
    fn test_exactly_at_cutoff_is_retained() {
        let now = Utc::now();
        let at_cutoff = now - Duration::hours(MAX_ARTICLE_AGE_HOURS);
        let kept = retain_fresh(vec![entry(Some(at_cutoff))], now);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_one_second_past_cutoff_is_dropped() {
        let now = Utc::now();
        let too_old = now - Duration::hours(MAX_ARTICLE_AGE_HOURS) - Duration::seconds(1);
        let kept = retain_fresh(vec![entry(Some(too_old))], now);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_undated_entry_always_passes() {
        let now = Utc::now();
        let kept = retain_fresh(vec![entry(None)], now);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_mixed_entries_keep_order() {
        let now = Utc::now();
        let fresh = entry(Some(now - Duration::hours(1)));
        let stale = entry(Some(now - Duration::hours(72)));
        let undated = entry(None);
        let kept = retain_fresh(vec![fresh.clone(), stale, undated.clone()], now);
        assert_eq!(kept, vec![fresh, undated]);
    }
}
