//! Document title extraction.

use crate::dom::Document;
use crate::patterns::TITLE_FALLBACK;

/// The document title, trimmed.
///
/// Prefers the parsed `<title>` element; when the parse produced none, falls
/// back to a raw-markup scan of the original input. Returns an empty string
/// when neither yields anything.
#[must_use]
pub fn extract_title(doc: &Document, raw_html: &str) -> String {
    let parsed = doc.select("title").text();
    let parsed = parsed.trim();
    if !parsed.is_empty() {
        return parsed.to_string();
    }

    TITLE_FALLBACK
        .captures(raw_html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
