//! Compiled regex classification tables driving the extraction heuristics.
//!
//! All patterns are compiled once at startup using `LazyLock`. They are pure
//! immutable lookup data shared by every extraction request; nothing here is
//! per-request state.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate classification
// =============================================================================

/// Matches id/class text of elements that are unlikely to hold article content
/// (banners, menus, sidebars, comment blocks, share widgets, ...).
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)banner|combx|comment|community|disqus|extra|foot|header|menu|modal|related|remark|rss|share|shoutbox|sidebar|skyscraper|sponsor|ad-break|agegate|pagination|pager|popup",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Whitelist that rescues an otherwise unlikely element from removal.
pub static OK_MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|main|shadow").expect("OK_MAYBE_CANDIDATE regex")
});

/// Matches id/class tokens that suggest an element carries content.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story",
    )
    .expect("POSITIVE_CLASS regex")
});

/// Matches id/class tokens that suggest boilerplate.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|modal|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE_CLASS regex")
});

// =============================================================================
// Structural probes
// =============================================================================

/// Block-level tags whose presence keeps a `div` from being reclassified as a
/// paragraph. Matched against the div's serialized inner contents.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(a|blockquote|dl|div|img|ol|p|pre|table|ul)")
        .expect("DIV_TO_P_ELEMENTS regex")
});

/// A run of two or more `<br>` tags separated only by whitespace - rewritten
/// into a paragraph boundary before parsing.
pub static REPLACE_BRS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(<br[^>]*>[ \n\r\t]*){2,}").expect("REPLACE_BRS regex")
});

/// Opening or closing `<font>` tags, rewritten to neutral `<span>` tags.
pub static REPLACE_FONTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)font[^>]*>").expect("REPLACE_FONTS regex")
});

/// Consecutive break elements (with interleaved whitespace or `&nbsp;`),
/// collapsed to a single normalized break at finalization.
pub static KILL_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<br\s*/?>(\s|&nbsp;?)*)+").expect("KILL_BREAKS regex")
});

// =============================================================================
// Embeds, links, titles
// =============================================================================

/// Known video-hosting domains; embeds referencing them survive sanitization.
pub static VIDEO_HOSTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)//(www\.)?(dailymotion|youtube|youtube-nocookie|player\.vimeo|youku|tudou|56|yinyuetai)\.com",
    )
    .expect("VIDEO_HOSTS regex")
});

/// Anchor wrapper in serialized markup, used when collapsing links to their
/// inner text.
pub static ANCHOR_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<a[^>]*>(.*?)</a>").expect("ANCHOR_WRAPPER regex")
});

/// Fallback title capture over the raw markup. The regex crate has no
/// lookbehind, so the tag pair is matched with a capture group instead.
pub static TITLE_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("TITLE_FALLBACK regex")
});

/// Whitespace runs, collapsed when measuring visible text length.
pub static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUNS regex"));
