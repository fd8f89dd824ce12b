use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::util::{strip_html, truncate_chars};

/// Parse-time cap on summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 500;

const ATOM_NS: &[u8] = b"http://www.w3.org/2005/Atom";
const DC_NS: &[u8] = b"http://purl.org/dc/elements/1.1/";
const CONTENT_NS: &[u8] = b"http://purl.org/rss/1.0/modules/content/";

/// One entry as it leaves the format sub-parsers: validated title/link,
/// normalized summary, parsed date. Source and category get stamped on by
/// the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub published: Option<DateTime<Utc>>,
}

/// Uniform output of both sub-parsers.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    /// Channel/feed title, or the feed URL when the document names none.
    pub source: String,
    pub entries: Vec<ParsedEntry>,
}

impl ParsedFeed {
    pub fn empty(feed_url: &str) -> Self {
        Self {
            source: feed_url.to_string(),
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FeedKind {
    Rss,
    Atom,
}

/// Parses a raw feed document, detecting RSS 2.0 vs Atom 1.0 from the root
/// element and dispatching to the matching sub-parser.
///
/// Best-effort by design: a document that cannot be parsed yields an empty
/// entry list, and an XML error partway through keeps the entries already
/// parsed. Entries without a title or link are dropped silently.
pub fn parse_feed(bytes: &[u8], feed_url: &str) -> ParsedFeed {
    let xml = String::from_utf8_lossy(bytes);
    match detect_kind(&xml) {
        Some(FeedKind::Atom) => parse_atom(&xml, feed_url),
        Some(FeedKind::Rss) => parse_rss(&xml, feed_url),
        None => ParsedFeed::empty(feed_url),
    }
}

/// Root-element sniff: a local name containing "feed" (case-insensitive) or
/// the Atom namespace means Atom; anything else is treated as RSS.
fn detect_kind(xml: &str) -> Option<FeedKind> {
    let mut reader = new_reader(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let (ns, local) = reader.resolve_element(e.name());
                let name = String::from_utf8_lossy(local.as_ref()).to_ascii_lowercase();
                let atom = name.contains("feed") || ns_is(&ns, ATOM_NS);
                return Some(if atom { FeedKind::Atom } else { FeedKind::Rss });
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

fn new_reader(xml: &str) -> NsReader<&[u8]> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader
}

fn ns_is(ns: &ResolveResult, url: &[u8]) -> bool {
    match ns {
        ResolveResult::Bound(Namespace(bound)) => *bound == url,
        _ => false,
    }
}

fn ns_is_unbound(ns: &ResolveResult) -> bool {
    matches!(ns, ResolveResult::Unbound)
}

/// RSS 2.0: `<rss><channel>` with `<item>` children. The first
/// channel-level `<title>` names the source; unknown containers (`image`,
/// `textInput`, ...) are skipped wholesale so a nested `<title>` cannot
/// hijack it.
fn parse_rss(xml: &str, feed_url: &str) -> ParsedFeed {
    let mut reader = new_reader(xml);
    let mut source: Option<String> = None;
    let mut entries = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (_, local) = reader.resolve_element(e.name());
                match local.as_ref() {
                    b"rss" | b"channel" => {}
                    b"item" => {
                        if let Some(entry) = parse_rss_item(&mut reader) {
                            entries.push(entry);
                        }
                    }
                    b"title" if source.is_none() => {
                        let text = collect_text(&mut reader);
                        let text = text.trim();
                        if !text.is_empty() {
                            source = Some(text.to_string());
                        }
                    }
                    _ => skip_element(&mut reader),
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    ParsedFeed {
        source: source.unwrap_or_else(|| feed_url.to_string()),
        entries,
    }
}

fn parse_rss_item(reader: &mut NsReader<&[u8]>) -> Option<ParsedEntry> {
    let mut title = None;
    let mut link = None;
    let mut description = None;
    let mut content_encoded = None;
    let mut pub_date = None;
    let mut dc_date = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (ns, local) = reader.resolve_element(e.name());
                match local.as_ref() {
                    // Plain RSS elements live in no namespace; requiring that
                    // keeps media:title and friends from clobbering them.
                    b"title" if ns_is_unbound(&ns) => title = Some(collect_text(reader)),
                    b"link" if ns_is_unbound(&ns) => link = Some(collect_text(reader)),
                    b"description" if ns_is_unbound(&ns) => {
                        description = Some(collect_text(reader))
                    }
                    b"encoded" if ns_is(&ns, CONTENT_NS) => {
                        content_encoded = Some(collect_text(reader))
                    }
                    b"pubDate" if ns_is_unbound(&ns) => pub_date = Some(collect_text(reader)),
                    b"date" if ns_is(&ns, DC_NS) => dc_date = Some(collect_text(reader)),
                    _ => skip_element(reader),
                }
            }
            // the only End reaching this level is </item>
            Ok(Event::End(_)) | Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    let date_str = pub_date.filter(|s: &String| !s.trim().is_empty()).or(dc_date);
    build_entry(title, link, [description, content_encoded], date_str)
}

/// Atom 1.0: `<feed>` with `<entry>` children. Elements are matched in the
/// Atom namespace, tolerating feeds that omit the default declaration.
fn parse_atom(xml: &str, feed_url: &str) -> ParsedFeed {
    let mut reader = new_reader(xml);
    let mut source: Option<String> = None;
    let mut entries = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (ns, local) = reader.resolve_element(e.name());
                if !(ns_is(&ns, ATOM_NS) || ns_is_unbound(&ns)) {
                    skip_element(&mut reader);
                    continue;
                }
                match local.as_ref() {
                    b"feed" => {}
                    b"entry" => {
                        if let Some(entry) = parse_atom_entry(&mut reader) {
                            entries.push(entry);
                        }
                    }
                    b"title" if source.is_none() => {
                        let text = collect_text(&mut reader);
                        let text = text.trim();
                        if !text.is_empty() {
                            source = Some(text.to_string());
                        }
                    }
                    _ => skip_element(&mut reader),
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    ParsedFeed {
        source: source.unwrap_or_else(|| feed_url.to_string()),
        entries,
    }
}

fn parse_atom_entry(reader: &mut NsReader<&[u8]>) -> Option<ParsedEntry> {
    let mut title = None;
    let mut alternate = None;
    let mut first_link = None;
    let mut summary = None;
    let mut content = None;
    let mut updated = None;
    let mut published = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (ns, local) = reader.resolve_element(e.name());
                if !(ns_is(&ns, ATOM_NS) || ns_is_unbound(&ns)) {
                    skip_element(reader);
                    continue;
                }
                match local.as_ref() {
                    b"title" => title = Some(collect_text(reader)),
                    b"link" => {
                        record_link(&e, &mut alternate, &mut first_link);
                        skip_element(reader);
                    }
                    b"summary" => summary = Some(collect_text(reader)),
                    b"content" => content = Some(collect_text(reader)),
                    b"updated" => updated = Some(collect_text(reader)),
                    b"published" => published = Some(collect_text(reader)),
                    _ => skip_element(reader),
                }
            }
            // <link .../> is normally self-closing
            Ok(Event::Empty(e)) => {
                let (ns, local) = reader.resolve_element(e.name());
                if (ns_is(&ns, ATOM_NS) || ns_is_unbound(&ns)) && local.as_ref() == b"link" {
                    record_link(&e, &mut alternate, &mut first_link);
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    let link = alternate.or(first_link);
    let date_str = updated.filter(|s: &String| !s.trim().is_empty()).or(published);
    build_entry(title, link, [summary, content], date_str)
}

/// Reads `rel`/`href` off a `<link>` element, keeping the alternate link
/// and the first link seen as a fallback.
fn record_link(e: &BytesStart, alternate: &mut Option<String>, first: &mut Option<String>) {
    let mut rel = None;
    let mut href = None;
    for attr in e.attributes().flatten() {
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        // URLs routinely carry &amp;; decode entities, fall back to raw
        let value = match quick_xml::escape::unescape(&raw) {
            Ok(unescaped) => unescaped.into_owned(),
            Err(_) => raw,
        };
        match attr.key.local_name().as_ref() {
            b"rel" => rel = Some(value),
            b"href" => href = Some(value),
            _ => {}
        }
    }
    let Some(href) = href.filter(|h: &String| !h.trim().is_empty()) else {
        return;
    };
    if rel.as_deref() == Some("alternate") {
        if alternate.is_none() {
            *alternate = Some(href);
        }
    } else if first.is_none() {
        *first = Some(href);
    }
}

/// Validates and normalizes the raw fields of one entry. The summary is the
/// first non-empty body candidate, HTML-stripped and capped.
fn build_entry(
    title: Option<String>,
    link: Option<String>,
    bodies: [Option<String>; 2],
    date_str: Option<String>,
) -> Option<ParsedEntry> {
    let title = title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())?;
    let url = link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())?;

    let raw_body = bodies
        .into_iter()
        .flatten()
        .find(|b| !b.trim().is_empty())
        .unwrap_or_default();
    let stripped = strip_html(&raw_body);
    let summary = truncate_chars(&stripped, SUMMARY_MAX_CHARS).to_string();

    let published = date_str.as_deref().and_then(parse_date);

    Some(ParsedEntry {
        title,
        url,
        summary,
        published,
    })
}

/// Feed date parsing: RFC 2822 first (RSS `pubDate`), then RFC 3339 (Atom
/// timestamps, trailing `Z` included), then naive ISO forms assumed UTC.
/// Unparseable dates are simply absent, not errors.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

/// Accumulates the text content of the element whose start tag was just
/// consumed, descending through nested markup (e.g. inline XHTML) and
/// joining text and CDATA sections.
fn collect_text(reader: &mut NsReader<&[u8]>) -> String {
    let mut depth = 0usize;
    let mut out = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Text(t)) => {
                if let Ok(text) = t.unescape() {
                    out.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                out.push_str(&String::from_utf8_lossy(t.as_ref()));
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }
    out
}

/// Consumes events up to the end of the element whose start tag was just
/// consumed.
fn skip_element(reader: &mut NsReader<&[u8]>) {
    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                if depth == 0 {
                    return;
                }
                depth -= 1;
            }
            Ok(Event::Eof) | Err(_) => return,
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const FEED_URL: &str = "https://example.com/feed.xml";

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    // ------------------------------------------------------------------
    // RSS
    // ------------------------------------------------------------------

    #[test]
    fn test_rss_basic_items() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>Example News</title>
  <item>
    <title>First story</title>
    <link>https://example.com/1</link>
    <description>Something happened.</description>
    <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
  </item>
  <item>
    <title>Second story</title>
    <link>https://example.com/2</link>
  </item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.source, "Example News");
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(
            parsed.entries[0],
            ParsedEntry {
                title: "First story".to_string(),
                url: "https://example.com/1".to_string(),
                summary: "Something happened.".to_string(),
                published: Some(utc(2024, 1, 1, 12, 0, 0)),
            }
        );
        assert_eq!(parsed.entries[1].summary, "");
        assert_eq!(parsed.entries[1].published, None);
    }

    #[test]
    fn test_rss_missing_title_or_link_dropped() {
        let xml = r#"<rss version="2.0"><channel>
  <title>Feed</title>
  <item><title>No link here</title></item>
  <item><link>https://example.com/no-title</link></item>
  <item><title>  </title><link>https://example.com/blank-title</link></item>
  <item><title>Kept</title><link>https://example.com/kept</link></item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].title, "Kept");
    }

    #[test]
    fn test_rss_content_encoded_fallback_and_cdata() {
        let xml = r#"<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel><title>Feed</title>
  <item>
    <title>Story</title>
    <link>https://example.com/1</link>
    <description></description>
    <content:encoded><![CDATA[<p>Rich <b>body</b> text</p>]]></content:encoded>
  </item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].summary, "Rich body text");
    }

    #[test]
    fn test_rss_description_preferred_over_encoded() {
        let xml = r#"<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel><title>Feed</title>
  <item>
    <title>Story</title>
    <link>https://example.com/1</link>
    <description>Short form</description>
    <content:encoded>Long form</content:encoded>
  </item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].summary, "Short form");
    }

    #[test]
    fn test_rss_dc_date() {
        let xml = r#"<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
<channel><title>Feed</title>
  <item>
    <title>Story</title>
    <link>https://example.com/1</link>
    <dc:date>2024-01-01T12:00:00Z</dc:date>
  </item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].published, Some(utc(2024, 1, 1, 12, 0, 0)));
    }

    #[test]
    fn test_rss_empty_pubdate_falls_back_to_dc_date() {
        let xml = r#"<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
<channel><title>Feed</title>
  <item>
    <title>Story</title>
    <link>https://example.com/1</link>
    <pubDate></pubDate>
    <dc:date>2024-06-15T08:00:00Z</dc:date>
  </item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].published, Some(utc(2024, 6, 15, 8, 0, 0)));
    }

    #[test]
    fn test_rss_missing_channel_title_falls_back_to_url() {
        let xml = r#"<rss version="2.0"><channel>
  <item><title>Story</title><link>https://example.com/1</link></item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.source, FEED_URL);
    }

    #[test]
    fn test_rss_image_title_does_not_hijack_source() {
        let xml = r#"<rss version="2.0"><channel>
  <image><title>Logo alt text</title><url>https://example.com/logo.png</url></image>
  <title>Real Title</title>
  <item><title>Story</title><link>https://example.com/1</link></item>
</channel></rss>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.source, "Real Title");
    }

    #[test]
    fn test_rss_summary_truncated_to_cap() {
        let long = "x".repeat(900);
        let xml = format!(
            r#"<rss version="2.0"><channel><title>Feed</title>
  <item><title>Story</title><link>https://example.com/1</link>
  <description>{long}</description></item>
</channel></rss>"#
        );

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].summary.chars().count(), SUMMARY_MAX_CHARS);
    }

    // ------------------------------------------------------------------
    // Atom
    // ------------------------------------------------------------------

    #[test]
    fn test_atom_basic_entries() {
        let xml = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Source</title>
  <entry>
    <title>First entry</title>
    <link rel="alternate" href="https://example.com/1"/>
    <summary>Entry summary</summary>
    <updated>2024-01-01T12:00:00Z</updated>
  </entry>
</feed>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.source, "Atom Source");
        assert_eq!(
            parsed.entries[0],
            ParsedEntry {
                title: "First entry".to_string(),
                url: "https://example.com/1".to_string(),
                summary: "Entry summary".to_string(),
                published: Some(utc(2024, 1, 1, 12, 0, 0)),
            }
        );
    }

    #[test]
    fn test_atom_link_prefers_alternate() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Feed</title>
  <entry>
    <title>Entry</title>
    <link rel="self" href="https://example.com/self"/>
    <link rel="alternate" href="https://example.com/article"/>
  </entry>
</feed>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].url, "https://example.com/article");
    }

    #[test]
    fn test_atom_link_falls_back_to_any_link() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Feed</title>
  <entry>
    <title>Entry</title>
    <link href="https://example.com/plain"/>
  </entry>
</feed>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].url, "https://example.com/plain");
    }

    #[test]
    fn test_atom_entry_without_link_dropped() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Feed</title>
  <entry><title>No link</title></entry>
</feed>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert!(parsed.entries.is_empty());
    }

    #[test]
    fn test_atom_content_fallback_and_published_date() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Feed</title>
  <entry>
    <title>Entry</title>
    <link href="https://example.com/1"/>
    <content type="html">&lt;p&gt;Escaped &amp;amp; rich&lt;/p&gt;</content>
    <published>2024-03-10T09:30:00Z</published>
  </entry>
</feed>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries[0].summary, "Escaped & rich");
        assert_eq!(parsed.entries[0].published, Some(utc(2024, 3, 10, 9, 30, 0)));
    }

    #[test]
    fn test_atom_without_default_namespace_tolerated() {
        let xml = r#"<feed>
  <title>Loose Feed</title>
  <entry>
    <title>Entry</title>
    <link href="https://example.com/1"/>
  </entry>
</feed>"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.source, "Loose Feed");
        assert_eq!(parsed.entries.len(), 1);
    }

    // ------------------------------------------------------------------
    // Detection and resilience
    // ------------------------------------------------------------------

    #[test]
    fn test_detect_rss_vs_atom() {
        assert_eq!(
            detect_kind(r#"<rss version="2.0"><channel/></rss>"#),
            Some(FeedKind::Rss)
        );
        assert_eq!(
            detect_kind(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#),
            Some(FeedKind::Atom)
        );
        // Atom namespace on an unusual root name still counts as Atom
        assert_eq!(
            detect_kind(r#"<x:root xmlns:x="http://www.w3.org/2005/Atom"/>"#),
            Some(FeedKind::Atom)
        );
        assert_eq!(detect_kind("<not valid"), None);
    }

    #[test]
    fn test_malformed_document_yields_empty() {
        let parsed = parse_feed(b"this is not xml at all", FEED_URL);
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.source, FEED_URL);
    }

    #[test]
    fn test_truncated_document_keeps_parsed_prefix() {
        let xml = r#"<rss version="2.0"><channel><title>Feed</title>
  <item><title>Complete</title><link>https://example.com/1</link></item>
  <item><title>Cut off</title><li"#;

        let parsed = parse_feed(xml.as_bytes(), FEED_URL);
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].title, "Complete");
    }

    // ------------------------------------------------------------------
    // Dates
    // ------------------------------------------------------------------

    #[test]
    fn test_parse_date_rfc2822() {
        assert_eq!(
            parse_date("Mon, 01 Jan 2024 12:00:00 GMT"),
            Some(utc(2024, 1, 1, 12, 0, 0))
        );
        assert_eq!(
            parse_date("Mon, 01 Jan 2024 12:00:00 +0200"),
            Some(utc(2024, 1, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_date_rfc3339() {
        assert_eq!(
            parse_date("2024-01-01T12:00:00Z"),
            Some(utc(2024, 1, 1, 12, 0, 0))
        );
        assert_eq!(
            parse_date("2024-01-01T12:00:00+02:00"),
            Some(utc(2024, 1, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_date_naive_assumed_utc() {
        assert_eq!(
            parse_date("2024-01-01T12:00:00"),
            Some(utc(2024, 1, 1, 12, 0, 0))
        );
        assert_eq!(
            parse_date("2024-01-01 12:00:00"),
            Some(utc(2024, 1, 1, 12, 0, 0))
        );
        assert_eq!(parse_date("2024-01-01"), Some(utc(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_date_garbage_is_none() {
        assert_eq!(parse_date("yesterday-ish"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }
}
