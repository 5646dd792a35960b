//! Abstract snippets for result display.
//!
//! Extracts a window of text around the first occurrence of the query
//! so result cards can show matching context. Operates on characters,
//! never byte offsets, so multibyte text cannot be split mid-code-point.

/// Default snippet window, in characters
pub const SNIPPET_LEN: usize = 250;

/// Characters of context kept before the first match
const LEAD_CONTEXT: usize = 60;

/// Extract a display snippet of `max_len` characters from `text`.
///
/// If `query` occurs in `text` (case-insensitive), the window starts
/// [`LEAD_CONTEXT`] characters before the match; otherwise it is a
/// plain prefix. `...` marks any cut edge.
pub fn snippet(text: &str, query: &str, max_len: usize) -> String {
    if text.is_empty() || max_len == 0 {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();

    let start = match_start(&chars, query).map_or(0, |idx| idx.saturating_sub(LEAD_CONTEXT));

    let end = (start + max_len).min(total);
    let mut out = String::new();
    if start > 0 {
        out.push_str("...");
    }
    out.extend(&chars[start..end]);
    if end < total {
        out.push_str("...");
    }
    out
}

/// Char index of the first case-insensitive occurrence of `query`.
fn match_start(chars: &[char], query: &str) -> Option<usize> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() || needle.len() > chars.len() {
        return None;
    }

    let lowered: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    lowered
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
}
