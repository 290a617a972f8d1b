//! Link density: the fraction of a node's visible text contributed by anchor
//! elements.
//!
//! High link density marks navigation blocks and link farms; candidate scores
//! are discounted by it and several cleaning rules threshold on it. The ratio
//! is recomputed on demand wherever needed and never cached, since tree edits
//! invalidate it.

use crate::dom::{self, NodeRef};

/// Fraction of `node`'s text that sits inside anchors, in `[0, 1]`.
///
/// Anchors that wrap only an image (no visible text of their own) are
/// excluded. A node with no text has a density of 0.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_length = dom::text_len(node);
    if text_length == 0 {
        return 0.0;
    }

    let mut link_length = 0usize;
    for anchor in dom::descendants_by_tag(node, "a") {
        let anchor_text = dom::text(&anchor);
        let trimmed = anchor_text.trim();
        if trimmed.is_empty() {
            // image-only (or empty) anchor
            continue;
        }
        link_length += anchor_text.chars().count();
    }

    let density = link_length as f64 / text_length as f64;
    density.clamp(0.0, 1.0)
}
