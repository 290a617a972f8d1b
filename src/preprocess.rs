//! Markup preprocessing applied before parsing.
//!
//! Pure text-to-text transforms: runs of line-break tags become paragraph
//! boundaries, and font-styling tags are neutralized to spans. The output is
//! what every parse attempt (including the relaxed retry) starts from.

use std::borrow::Cow;

use crate::patterns::{REPLACE_BRS, REPLACE_FONTS};

/// Rewrites raw markup into the form the pipeline parses.
///
/// Break-run replacement structurally alters paragraph boundaries and is not
/// idempotent by design; the font rewrite is.
#[must_use]
pub fn preprocess(raw: &str) -> String {
    let with_paragraphs: Cow<'_, str> = REPLACE_BRS.replace_all(raw, "</p><p>");
    REPLACE_FONTS
        .replace_all(&with_paragraphs, "<${1}span>")
        .into_owned()
}
