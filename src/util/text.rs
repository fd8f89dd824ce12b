use std::borrow::Cow;

/// Converts an HTML fragment into plain text.
///
/// Removes tags, decodes the common character entities, and collapses
/// whitespace runs into single spaces with the ends trimmed. Feed
/// summaries arrive as arbitrary markup (`description`, `content:encoded`,
/// Atom `content`) and this is the one normalization point for all of them.
///
/// Returns `Cow::Borrowed` when the input is already plain text with no
/// redundant whitespace (the common case for well-behaved feeds) — a
/// single scan with no allocation.
pub fn strip_html(s: &str) -> Cow<'_, str> {
    if is_plain_text(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    let mut i = 0;

    while i < s.len() {
        let c = match s[i..].chars().next() {
            Some(c) => c,
            None => break,
        };

        if c == '<' {
            // Skip the whole tag; a tag boundary separates words.
            // An unterminated tag swallows the rest of the fragment.
            match s[i..].find('>') {
                Some(off) => i += off + 1,
                None => break,
            }
            pending_space = true;
            continue;
        }

        if c == '&' {
            if let Some((decoded, consumed)) = decode_entity(&s[i..]) {
                if decoded.is_whitespace() {
                    pending_space = true;
                } else {
                    if pending_space && !out.is_empty() {
                        out.push(' ');
                    }
                    pending_space = false;
                    out.push(decoded);
                }
                i += consumed;
                continue;
            }
            // Not a recognizable entity; fall through as a literal '&'.
        }

        if c.is_whitespace() {
            pending_space = true;
            i += c.len_utf8();
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
        i += c.len_utf8();
    }

    Cow::Owned(out)
}

/// Fast-path check: no markup, no entities, and every whitespace char is a
/// single interior space.
fn is_plain_text(s: &str) -> bool {
    if s.starts_with(' ') || s.ends_with(' ') {
        return false;
    }
    let mut prev_space = false;
    for c in s.chars() {
        if c == '<' || c == '&' {
            return false;
        }
        if c.is_whitespace() {
            if c != ' ' || prev_space {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }
    true
}

/// Decodes one leading HTML entity, returning the replacement character and
/// the number of input bytes consumed. Handles the named entities feeds
/// actually emit plus numeric (`&#8217;`) and hex (`&#x2019;`) forms.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let rest = s.strip_prefix('&')?;
    let end = rest.find(';')?;
    if end == 0 || end > 8 {
        return None;
    }
    let name = &rest[..end];
    let consumed = end + 2; // '&' + name + ';'
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((c, consumed))
}

/// Truncates a string to at most `max` characters, never splitting a
/// multi-byte character. Returns a borrowed prefix; no ellipsis is added.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
