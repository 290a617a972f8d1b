//! Heuristic article-content extraction from HTML markup.
//!
//! Given raw markup, the pipeline preprocesses it, parses it into a DOM
//! tree, strips boilerplate, scores candidate containers, selects the one
//! that best represents the article body and sanitizes it into presentable
//! output. The heuristics (tag biases, id/class weighting, link-density
//! penalties, ancestor score propagation, sibling inclusion) are empirically
//! tuned and interact; see the individual modules for each stage.
//!
//! Extraction is synchronous and self-contained: no network access, no
//! shared state between requests. When the strict first pass yields too
//! little text, one relaxed retry re-runs the pipeline with boilerplate
//! stripping disabled.
//!
//! # Example
//!
//! ```rust
//! let html = r#"<html><head><title>A Story</title></head>
//! <body><div><p>Article text, long enough to be worth extracting,
//! with several clauses, commas, and other signals of prose.</p></div>
//! </body></html>"#;
//!
//! let article = rs_readability::extract(html, "http://example.com/story")?;
//! assert_eq!(article.title, "A Story");
//! assert!(article.content_text.contains("Article text"));
//! # Ok::<(), rs_readability::Error>(())
//! ```

mod dom;
mod error;
mod extract;
mod fragment;
mod images;
mod link_density;
mod options;
mod patterns;
mod preprocess;
mod result;
mod sanitize;
mod scoring;
mod selector;
mod title;

pub use error::{Error, Result};
pub use extract::{extract, extract_with_options};
pub use options::Options;
pub use result::ExtractResult;
