//! Free-text cleanup for feed bodies.
//!
//! `clean_content` strips markup and decodes the handful of entities the
//! storefront actually emits; `escape_xml` makes the result safe to embed
//! in the feed documents.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*?>").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip markup tags, decode a fixed entity set, and collapse whitespace.
///
/// The entity replacements run in a fixed order: `&nbsp;`, `&amp;`, `&lt;`,
/// `&gt;`, `&quot;`, `&#39;`. Decoding `&amp;` before `&lt;`/`&gt;` means
/// doubly-encoded input (e.g. `&amp;lt;`) is unescaped twice. Downstream
/// indexing relies on the current output, so the order is kept as-is rather
/// than corrected.
pub fn clean_content(text: Option<&str>) -> String {
    let text = match text {
        Some(t) => t,
        None => return String::new(),
    };

    let stripped = TAG_PATTERN.replace_all(text, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    WHITESPACE_PATTERN
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Escape the five XML-reserved characters. `&` is replaced first so the
/// other substitutions cannot be double-escaped.
pub fn escape_xml(text: Option<&str>) -> String {
    match text {
        Some(t) => t
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
        None => String::new(),
    }
}
