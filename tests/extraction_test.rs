//! End-to-end extraction scenarios over small, self-contained documents.

use rs_readability::{extract, extract_with_options, Options};

/// A full article page: real content, a link-heavy sidebar, an embedded
/// comment block, a junk image table and images needing resolution. The
/// article text is comfortably over the retry threshold so the strict pass
/// stands on its own.
fn article_page() -> String {
    let paragraphs = r#"
        <p>The first paragraph of the article introduces its subject, lays out the
        central question, and promises the reader a thorough treatment over the
        following sections of prose.</p>
        <p>The second paragraph develops the argument, citing earlier work, noting
        disagreements between sources, and settling on a working definition that
        the rest of the piece relies upon.</p>
        <p>A third paragraph introduces the supporting evidence, walks through the
        first example in detail, and closes with a transition into the broader
        survey that follows it.</p>
        <p>The fourth paragraph continues the survey, comparing approaches, noting
        trade-offs, and keeping the reader oriented with regular summaries of what
        has been established so far.</p>
        <p>The fifth paragraph turns to counterarguments, treats them seriously,
        and concedes the points that deserve concession while defending the main
        line of reasoning.</p>
        <p>The closing paragraph restates the thesis, gathers the threads of the
        argument, and leaves the reader with a concrete recommendation and a
        pointer to further reading.</p>
        <p>Illustration: <img src="/a/b.png"> and a hosted copy
        <img src="https://cdn.example.net/pic.png"> appear inline.</p>
        <p>A concluding aside links to the <a href="/archive">article archive</a>
        for readers who want more, with enough surrounding prose to stay clearly
        below any link-density threshold.</p>"#;

    format!(
        r#"<html><head><title>Example Title</title></head><body>
        <nav class="sidebar-menu">
            <a href="/home">home</a> <a href="/about">about</a>
            <a href="/archive">archive</a> <a href="/contact">contact</a>
        </nav>
        <div class="article-body">
            {paragraphs}
            <div class="comment-thread"><p>First! Great post, totally agree with
            everything written here, subscribed.</p></div>
            <table><tr><td>
                <img src="t1.png"><img src="t2.png"><img src="t3.png">
                <img src="t4.png"><img src="t5.png">
            </td></tr><tr><td><p>gallery</p></td></tr></table>
        </div>
        </body></html>"#
    )
}

const BASE_URL: &str = "http://example.com/x/y";

#[test]
fn single_content_div_is_extracted() {
    let html = r#"<html><body><div><p>A single paragraph with one clause here,
        and a second clause following it.</p></div></body></html>"#;
    let result = extract(html, "").expect("extraction should succeed");
    assert!(result.content_text.contains("second clause"));
    assert!(result.content_html.contains("<p>"));
}

#[test]
fn unlikely_blocks_are_stripped_from_a_full_page() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    // sidebar and embedded comments never reach the output
    assert!(!result.content_html.contains("sidebar-menu"));
    assert!(!result.content_text.contains("Great post"));
    assert!(result.content_text.contains("central question"));
    // the strict pass produced enough text, so no retry happened
    assert!(result.warnings.is_empty());
}

#[test]
fn relative_images_resolve_against_the_base_url() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    assert!(result.content_html.contains(r#"src="http://example.com/a/b.png""#));
}

#[test]
fn absolute_images_pass_through_unchanged() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    assert!(result.content_html.contains(r#"src="https://cdn.example.net/pic.png""#));
}

#[test]
fn image_heavy_table_is_cleaned_away() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    assert!(!result.content_html.contains("<table"));
    assert!(!result.content_html.contains("t1.png"));
}

#[test]
fn short_documents_trigger_exactly_one_relaxed_retry() {
    // the only real text sits in a block the strict pass removes
    let html = r#"<html><body><div class="extra"><p>A short piece of body text,
        not nearly long enough to satisfy the strict pass.</p></div></body></html>"#;
    let result = extract(html, "").expect("extraction should succeed");

    let retries = result
        .warnings
        .iter()
        .filter(|w| w.contains("relaxed"))
        .count();
    assert_eq!(retries, 1);
    // the final result reflects the relaxed pass, which kept the block
    assert!(result.content_text.contains("short piece of body text"));
}

#[test]
fn relaxed_pass_never_yields_less_text_than_strict() {
    let html = r#"<html><body><div class="extra"><p>A short piece of body text,
        not nearly long enough to satisfy the strict pass.</p></div></body></html>"#;

    // min_retry_text_len of zero accepts the strict pass as-is
    let strict_only = Options {
        min_retry_text_len: 0,
        ..Options::default()
    };
    let strict = extract_with_options(html, "", &strict_only).expect("strict extraction");
    let relaxed = extract(html, "").expect("relaxed extraction");

    assert!(relaxed.content_text.chars().count() >= strict.content_text.chars().count());
}

#[test]
fn title_comes_from_the_title_element() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    assert_eq!(result.title, "Example Title");
}

#[test]
fn missing_title_yields_an_empty_title() {
    let html = "<html><body><div><p>Body text with a clause, and another clause,
        but no title anywhere in the document.</p></div></body></html>";
    let result = extract(html, "").expect("extraction should succeed");
    assert_eq!(result.title, "");
}

#[test]
fn extraction_is_deterministic() {
    let page = article_page();
    let first = extract(&page, BASE_URL).expect("first run");
    let second = extract(&page, BASE_URL).expect("second run");

    assert_eq!(first.title, second.title);
    assert_eq!(first.content_html, second.content_html);
    assert_eq!(first.content_text, second.content_text);
    assert_eq!(first.description, second.description);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn description_is_a_bounded_prefix_of_the_text() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    assert!(result.description.chars().count() <= 200);
    assert!(result.content_text.starts_with(&result.description));
}

#[test]
fn presentational_attributes_are_absent_from_output() {
    let result = extract(&article_page(), BASE_URL).expect("extraction should succeed");
    assert!(!result.content_html.contains("class="));
    assert!(!result.content_html.contains("style="));
}

#[test]
fn clean_links_unwraps_anchors() {
    let options = Options {
        clean_links: true,
        ..Options::default()
    };
    let result =
        extract_with_options(&article_page(), BASE_URL, &options).expect("extraction");
    assert!(!result.content_html.contains("<a "));
    assert!(result.content_text.contains("article archive"));
}

#[test]
fn empty_document_yields_an_empty_result() {
    let result = extract("", "").expect("extraction should succeed");
    assert!(result.content_html.is_empty());
    assert!(result.content_text.is_empty());
    assert!(result.description.is_empty());
    // strict found nothing, retried relaxed, which also found nothing
    assert!(!result.warnings.is_empty());
}

#[test]
fn invalid_base_url_is_rejected() {
    assert!(extract("<p>x</p>", "not a url").is_err());
}
