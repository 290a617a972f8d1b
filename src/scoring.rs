//! Candidate scoring: class weighting, candidate initialization and the
//! content-score pass.
//!
//! A `Candidate` associates one node with an accumulating score. The map is
//! keyed by `NodeId` - the arena identity the parser assigned at
//! tree-construction time - so two distinct nodes with identical rendered
//! content can never alias, and a node keeps its candidate through in-place
//! mutation. One map exists per pipeline attempt; a retry rebuilds the tree
//! and starts an empty map.

use std::collections::HashMap;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::options::{ANCESTOR_SCORE_LEVELS, MAX_LENGTH_BONUS, MIN_SCORABLE_TEXT_LEN};
use crate::patterns::{NEGATIVE_CLASS, POSITIVE_CLASS};

/// Tags whose text contributes score to their ancestors.
const SCORABLE_TAGS: &str = "section, h2, h3, h4, h5, h6, p, td, pre";

/// Weight applied on a positive or negative id/class match.
const CLASS_WEIGHT_STEP: f64 = 25.0;

/// A node under consideration as (part of) the article body.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The candidate node, referenced in the live tree.
    pub node: NodeRef<'a>,
    /// Accumulated content score.
    pub score: f64,
}

/// At most one candidate per distinct node identity per attempt.
pub type CandidateMap<'a> = HashMap<NodeId, Candidate<'a>>;

/// Heuristic score adjustment derived from a node's id/class attribute text.
///
/// +25 on a positive match, -25 on a negative match; both may apply (net 0),
/// absent attributes contribute 0.
#[must_use]
pub fn class_weight(node: &NodeRef) -> f64 {
    let id_class = dom::id_class_text(node);
    if id_class.is_empty() {
        return 0.0;
    }

    let mut weight = 0.0;
    if POSITIVE_CLASS.is_match(&id_class) {
        weight += CLASS_WEIGHT_STEP;
    }
    if NEGATIVE_CLASS.is_match(&id_class) {
        weight -= CLASS_WEIGHT_STEP;
    }
    weight
}

/// Starting score for a freshly observed candidate: a structural tag bias
/// plus the node's class weight, seeded before any text contributions arrive.
fn initial_score(node: &NodeRef) -> f64 {
    let bias = match dom::tag_name(node).as_deref() {
        Some("div") => 5.0,
        Some("blockquote" | "pre" | "td") => 3.0,
        Some("form" | "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li") => -3.0,
        Some("th" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6") => -5.0,
        _ => 0.0,
    };
    bias + class_weight(node)
}

/// Number of comma-delimited segments in the text, treating the full-width
/// comma as equivalent to an ASCII comma.
fn comma_segments(text: &str) -> usize {
    text.replace('\u{ff0c}', ",").split(',').count()
}

/// Content score a single scorable node contributes before decay.
fn content_score(text: &str) -> f64 {
    let text_length = text.chars().count();
    let length_bonus = (text_length / 100).min(MAX_LENGTH_BONUS);
    1.0 + comma_segments(text) as f64 + length_bonus as f64
}

/// Scores every scorable element and propagates weighted contributions to up
/// to three ancestor levels, returning the per-attempt candidate map.
///
/// The ancestor at level `L` (parent = 1) receives `score / L`, a decay that
/// favors nearer ancestors as the true content container.
#[must_use]
pub fn score_candidates(doc: &Document) -> CandidateMap<'_> {
    let mut candidates = CandidateMap::new();

    for node in doc.select(SCORABLE_TAGS).nodes() {
        if node.parent().filter(dom_query::NodeRef::is_element).is_none() {
            continue;
        }

        let text = dom::text(node);
        if text.chars().count() < MIN_SCORABLE_TEXT_LEN {
            continue;
        }
        let score = content_score(&text);

        let mut ancestor = node.parent();
        for level in 1..=ANCESTOR_SCORE_LEVELS {
            let Some(current) = ancestor.filter(dom_query::NodeRef::is_element) else {
                break;
            };
            let entry = candidates.entry(current.id).or_insert_with(|| Candidate {
                node: current,
                score: initial_score(&current),
            });
            entry.score += score / level as f64;
            ancestor = current.parent();
        }
    }

    candidates
}
