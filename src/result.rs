//! Result types for extraction output.

/// Result of content extraction from an HTML document.
///
/// An empty `content_html`/`description`/`title` is a valid "no extractable
/// article" result, not an error.
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    /// Document title, from the title element or the raw-markup fallback.
    pub title: String,

    /// Extracted article content as serialized markup.
    pub content_html: String,

    /// Visible text of the extracted content, whitespace collapsed.
    pub content_text: String,

    /// First 200 characters of the extracted text, captured before break
    /// collapsing.
    pub description: String,

    /// Non-fatal issues encountered during extraction, such as a relaxed
    /// retry or a document with no candidates.
    pub warnings: Vec<String>,
}
