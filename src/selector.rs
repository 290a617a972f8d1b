//! Top-candidate selection: link-density discount, ancestor climb and
//! sibling gathering.

use crate::dom::{self, Document, NodeRef};
use crate::fragment::ContentFragment;
use crate::link_density::link_density;
use crate::options::{
    CLIMB_SCORE_DIVISOR, SIBLING_MAX_LINK_DENSITY, SIBLING_PARAGRAPH_MIN_LEN, SIBLING_SCORE_FLOOR,
    SIBLING_SCORE_RATIO,
};
use crate::scoring::CandidateMap;

/// Picks the top candidate and gathers the final content fragment.
///
/// Every candidate's score is first discounted in place by
/// `1 - link_density`, penalizing nodes whose text is mostly link text.
/// Returns `None` when no candidates exist.
#[must_use]
pub fn select_content<'a>(
    doc: &'a Document,
    candidates: &mut CandidateMap<'a>,
) -> Option<ContentFragment<'a>> {
    for candidate in candidates.values_mut() {
        candidate.score *= 1.0 - link_density(&candidate.node);
    }

    let top = pick_top_candidate(doc, candidates)?;
    let top = climb_ancestors(top, candidates);
    Some(gather_siblings(top, candidates))
}

/// Highest-scoring candidate; ties resolve to the first in document order.
///
/// The map's own iteration order is unspecified, so the walk runs over the
/// document instead and replaces the running best only on a strictly greater
/// score. This makes equal-score selection deterministic and testable.
fn pick_top_candidate<'a>(
    doc: &'a Document,
    candidates: &CandidateMap<'a>,
) -> Option<(NodeRef<'a>, f64)> {
    let mut best: Option<(NodeRef<'a>, f64)> = None;
    for node in dom::document_elements(doc) {
        let Some(candidate) = candidates.get(&node.id) else {
            continue;
        };
        match best {
            Some((_, best_score)) if candidate.score <= best_score => {}
            _ => best = Some((node, candidate.score)),
        }
    }
    best
}

/// Climbs toward a higher-scoring ancestor container.
///
/// Starting from the top candidate's parent: stop at the first ancestor with
/// no recorded candidate or scoring below a third of the best score; adopt an
/// ancestor that beats the best score outright. This rescues cases where the
/// true article container is a shallow ancestor whose own children were only
/// partially scored.
fn climb_ancestors<'a>(
    top: (NodeRef<'a>, f64),
    candidates: &CandidateMap<'a>,
) -> (NodeRef<'a>, f64) {
    let (top_node, best_score) = top;
    let mut reference = top_node;

    loop {
        let Some(parent) = reference.parent().filter(dom_query::NodeRef::is_element) else {
            return (top_node, best_score);
        };
        let Some(candidate) = candidates.get(&parent.id) else {
            return (top_node, best_score);
        };
        if candidate.score < best_score / CLIMB_SCORE_DIVISOR {
            return (top_node, best_score);
        }
        if candidate.score > best_score {
            return (parent, candidate.score);
        }
        reference = parent;
    }
}

/// Gathers the top candidate's siblings that look like they belong to the
/// same article into the content fragment.
fn gather_siblings<'a>(
    top: (NodeRef<'a>, f64),
    candidates: &CandidateMap<'a>,
) -> ContentFragment<'a> {
    let (top_node, top_score) = top;

    let Some(parent) = top_node.parent().filter(dom_query::NodeRef::is_element) else {
        return ContentFragment::new(vec![top_node]);
    };

    let sibling_threshold = SIBLING_SCORE_FLOOR.max(top_score * SIBLING_SCORE_RATIO);
    let mut roots = Vec::new();

    for sibling in parent.children() {
        if !sibling.is_element() {
            continue;
        }
        if sibling.id == top_node.id {
            roots.push(sibling);
            continue;
        }
        if let Some(candidate) = candidates.get(&sibling.id) {
            if candidate.score >= sibling_threshold {
                roots.push(sibling);
                continue;
            }
        }
        if dom::is_tag(&sibling, "p")
            && dom::text_len(&sibling) > SIBLING_PARAGRAPH_MIN_LEN
            && link_density(&sibling) < SIBLING_MAX_LINK_DENSITY
        {
            roots.push(sibling);
        }
    }

    ContentFragment::new(roots)
}
