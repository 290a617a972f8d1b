//! The extraction pipeline: preprocess, parse, strip, score, select,
//! sanitize, with a bounded strict-then-relaxed retry.
//!
//! Stripping mutates the tree destructively, so a retry re-parses the
//! preprocessed markup from scratch and rebuilds the candidate map; nothing
//! from a failed attempt is reused.

use std::collections::HashSet;

use url::Url;

use crate::dom::{self, Document, NodeId};
use crate::error::Result;
use crate::options::{Options, DESCRIPTION_LEN};
use crate::patterns::{
    ANCHOR_WRAPPER, DIV_TO_P_ELEMENTS, KILL_BREAKS, OK_MAYBE_CANDIDATE, UNLIKELY_CANDIDATES,
    WHITESPACE_RUNS,
};
use crate::preprocess::preprocess;
use crate::result::ExtractResult;
use crate::sanitize::sanitize;
use crate::scoring::score_candidates;
use crate::selector::select_content;
use crate::title::extract_title;

/// Stripping aggressiveness of one pipeline attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StripMode {
    /// Unlikely-candidate removal enabled.
    Strict,
    /// Unlikely-candidate removal disabled; only disallowed tag kinds go.
    Relaxed,
}

/// Extracts article content from raw markup with default options.
///
/// `base_url` is used to absolutize image paths; pass an empty string when no
/// base is known. A non-empty base URL that fails to parse is an error.
pub fn extract(html: &str, base_url: &str) -> Result<ExtractResult> {
    extract_with_options(html, base_url, &Options::default())
}

/// Extracts article content from raw markup.
///
/// Runs the strict pass first; when it yields fewer than
/// `options.min_retry_text_len` characters of collapsed text, a single
/// relaxed pass re-runs the whole pipeline from a fresh parse. "No
/// extractable article" is a valid empty result, not an error.
pub fn extract_with_options(html: &str, base_url: &str, options: &Options) -> Result<ExtractResult> {
    let base = parse_base_url(base_url)?;
    let prepared = preprocess(html);

    let mut warnings = Vec::new();
    let mut mode = StripMode::Strict;

    loop {
        let attempt = run_attempt(&prepared, html, base.as_ref(), mode, &mut warnings);

        let collapsed = collapse_whitespace(&attempt.text);
        if mode == StripMode::Strict && collapsed.chars().count() < options.min_retry_text_len {
            if cfg!(debug_assertions) {
                eprintln!(
                    "strict pass yielded {} chars, retrying relaxed",
                    collapsed.chars().count()
                );
            }
            warnings.push(format!(
                "strict pass produced only {} characters of text; retrying with relaxed stripping",
                collapsed.chars().count()
            ));
            mode = StripMode::Relaxed;
            continue;
        }

        return Ok(finalize(attempt, collapsed, options, warnings));
    }
}

/// What one pipeline attempt produced, detached from its tree.
struct Attempt {
    title: String,
    content_html: String,
    text: String,
}

fn run_attempt(
    prepared: &str,
    raw_html: &str,
    base: Option<&Url>,
    mode: StripMode,
    warnings: &mut Vec<String>,
) -> Attempt {
    let doc = dom::parse(prepared);
    let title = extract_title(&doc, raw_html);

    strip_unwanted(&doc, mode);

    let mut candidates = score_candidates(&doc);
    let Some(mut fragment) = select_content(&doc, &mut candidates) else {
        warnings.push("no scorable candidates found".to_string());
        return Attempt {
            title,
            content_html: String::new(),
            text: String::new(),
        };
    };

    sanitize(&mut fragment, &candidates, base);

    Attempt {
        title,
        text: fragment.text(),
        content_html: fragment.serialize(),
    }
}

fn finalize(
    attempt: Attempt,
    collapsed_text: String,
    options: &Options,
    warnings: Vec<String>,
) -> ExtractResult {
    let description: String = collapsed_text.chars().take(DESCRIPTION_LEN).collect();

    let mut content_html = KILL_BREAKS
        .replace_all(&attempt.content_html, "<br />")
        .into_owned();
    if options.clean_links {
        content_html = ANCHOR_WRAPPER.replace_all(&content_html, "${1}").into_owned();
    }

    ExtractResult {
        title: attempt.title,
        content_html,
        content_text: collapsed_text,
        description,
        warnings,
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text, " ").trim().to_string()
}

fn parse_base_url(base_url: &str) -> Result<Option<Url>> {
    if base_url.is_empty() {
        return Ok(None);
    }
    Ok(Some(Url::parse(base_url)?))
}

/// Removes disallowed tag kinds; in strict mode additionally removes unlikely
/// candidates, then reclassifies text-only divs as paragraphs.
fn strip_unwanted(doc: &Document, mode: StripMode) {
    doc.select("script, noscript, style, link").remove();

    if mode == StripMode::Strict {
        strip_unlikely_candidates(doc);
    }

    reclassify_bare_divs(doc);
}

/// Depth-first pre-order removal of elements whose id/class text matches the
/// unlikely-candidate pattern without the whitelist rescue. Nodes inside an
/// already removed subtree are skipped, so a subtree is judged once, at its
/// highest matching root.
fn strip_unlikely_candidates(doc: &Document) {
    let mut removed: HashSet<NodeId> = HashSet::new();

    for node in dom::document_elements(doc) {
        if removed.contains(&node.id)
            || node.ancestors(None).iter().any(|a| removed.contains(&a.id))
        {
            continue;
        }
        if dom::is_tag(&node, "body") || dom::is_tag(&node, "a") {
            continue;
        }
        let id_class = dom::id_class_text(&node);
        if id_class.is_empty() {
            continue;
        }
        if UNLIKELY_CANDIDATES.is_match(&id_class) && !OK_MAYBE_CANDIDATE.is_match(&id_class) {
            if cfg!(debug_assertions) {
                eprintln!("stripping unlikely candidate: {id_class}");
            }
            removed.insert(node.id);
            dom::remove(&node);
        }
    }
}

/// Divs whose serialized contents hold no block-level element become
/// paragraphs in place, so the scorer can treat their text as scorable.
fn reclassify_bare_divs(doc: &Document) {
    for div in dom::document_elements(doc) {
        if !dom::is_tag(&div, "div") {
            continue;
        }
        if !DIV_TO_P_ELEMENTS.is_match(&dom::inner_html(&div)) {
            dom::rename(&div, "p");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_tags_are_always_removed() {
        let doc = dom::parse(
            r#"<html><head><style>p{}</style><link rel="stylesheet" href="a.css"></head>
            <body><script>x()</script><noscript>off</noscript><p>kept</p></body></html>"#,
        );
        strip_unwanted(&doc, StripMode::Relaxed);
        assert!(doc.select("script").is_empty());
        assert!(doc.select("noscript").is_empty());
        assert!(doc.select("style").is_empty());
        assert!(doc.select("link").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn unlikely_candidates_go_only_in_strict_mode() {
        let html = r#"<body><div class="sidebar-menu"><p>nav</p></div><div><p>body text</p></div></body>"#;

        let doc = dom::parse(html);
        strip_unwanted(&doc, StripMode::Strict);
        assert!(doc.select(".sidebar-menu").is_empty());

        let doc = dom::parse(html);
        strip_unwanted(&doc, StripMode::Relaxed);
        assert!(doc.select(".sidebar-menu").exists());
    }

    #[test]
    fn whitelist_token_rescues_unlikely_candidate() {
        let doc = dom::parse(r#"<body><div class="article-sidebar"><p>kept</p></div></body>"#);
        strip_unwanted(&doc, StripMode::Strict);
        assert!(doc.select(".article-sidebar").exists());
    }

    #[test]
    fn anchors_survive_unlikely_matching() {
        let doc = dom::parse(r#"<body><a class="share" href="/s">share link</a></body>"#);
        strip_unwanted(&doc, StripMode::Strict);
        assert!(doc.select("a").exists());
    }

    #[test]
    fn bare_divs_become_paragraphs() {
        let doc = dom::parse(
            "<body><div>just text</div><div><p>has a block child</p></div></body>",
        );
        strip_unwanted(&doc, StripMode::Relaxed);
        // the text-only div was renamed, the structural one kept
        assert_eq!(doc.select("div").length(), 1);
        assert!(doc.select("body > p").exists());
    }

    #[test]
    fn empty_base_url_is_accepted() {
        assert!(matches!(parse_base_url(""), Ok(None)));
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn collapse_whitespace_normalizes_runs() {
        assert_eq!(collapse_whitespace("  a\n\n b\t\tc  "), "a b c");
    }
}
