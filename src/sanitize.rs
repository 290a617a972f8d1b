//! Article sanitization: conditional cleaning of the selected content
//! fragment.
//!
//! Every step's side effect is removal. All steps are best-effort; an
//! unmatched conditional leaves the node untouched and nothing here aborts
//! the pipeline.

use std::collections::HashSet;

use url::Url;

use crate::dom::{self, NodeId, NodeRef};
use crate::fragment::ContentFragment;
use crate::images;
use crate::link_density::link_density;
use crate::patterns::VIDEO_HOSTS;
use crate::scoring::{class_weight, CandidateMap};

/// Heading levels subject to the negative-class-weight removal rule.
const CLEANED_HEADING_LEVELS: [&str; 3] = ["h1", "h2", "h3"];

/// Ancestor levels inspected for the figure exception during conditional
/// cleaning.
const FIGURE_ANCESTOR_LEVELS: usize = 3;

/// Sanitizes the selected content fragment in place.
///
/// Runs the removal passes in their fixed order, then resolves image paths
/// and strips presentational attributes. Candidate scores recorded during
/// scoring stay consultable because nodes keep their identity.
pub fn sanitize(
    fragment: &mut ContentFragment<'_>,
    candidates: &CandidateMap<'_>,
    base_url: Option<&Url>,
) {
    clean_embeds(fragment);
    clean_conditionally(fragment, candidates, "form");
    clean_all(fragment, "footer");
    clean_all(fragment, "fieldset");
    clean_lone_heading(fragment, "h1");
    clean_lone_heading(fragment, "h2");
    clean_all(fragment, "iframe");
    clean_negative_headings(fragment);
    clean_conditionally(fragment, candidates, "table");
    clean_conditionally(fragment, candidates, "ul");
    clean_conditionally(fragment, candidates, "div");
    clean_empty_paragraphs(fragment);
    images::resolve_image_paths(fragment, base_url);
    strip_presentational_attributes(fragment);
}

/// Removes `object` and `embed` elements unless they reference a known
/// video-hosting domain in their attribute values or serialized contents.
fn clean_embeds(fragment: &mut ContentFragment<'_>) {
    for tag in ["object", "embed"] {
        for node in fragment.elements_by_tag(tag) {
            if VIDEO_HOSTS.is_match(&dom::all_attribute_values(&node)) {
                continue;
            }
            if VIDEO_HOSTS.is_match(&dom::inner_html(&node)) {
                continue;
            }
            fragment.remove_node(&node);
        }
    }
}

/// Removes every element of the given tag kind, unconditionally.
fn clean_all(fragment: &mut ContentFragment<'_>, tag: &str) {
    for node in fragment.elements_by_tag(tag) {
        fragment.remove_node(&node);
    }
}

/// A lone heading of the given level is a duplicate of the title, not body
/// content; two or more are kept as section structure.
fn clean_lone_heading(fragment: &mut ContentFragment<'_>, tag: &str) {
    let headings = fragment.elements_by_tag(tag);
    if let [heading] = headings.as_slice() {
        fragment.remove_node(heading);
    }
}

/// Removes h1-h3 headings whose class weight is negative.
fn clean_negative_headings(fragment: &mut ContentFragment<'_>) {
    for level in CLEANED_HEADING_LEVELS {
        for heading in fragment.elements_by_tag(level) {
            if class_weight(&heading) < 0.0 {
                fragment.remove_node(&heading);
            }
        }
    }
}

/// Removes paragraphs with no embedded media and no text.
fn clean_empty_paragraphs(fragment: &mut ContentFragment<'_>) {
    for paragraph in fragment.elements_by_tag("p") {
        let media = dom::count_descendants(&paragraph, "img")
            + dom::count_descendants(&paragraph, "embed")
            + dom::count_descendants(&paragraph, "object")
            + dom::count_descendants(&paragraph, "iframe");
        if media == 0 && dom::text_len(&paragraph) == 0 {
            fragment.remove_node(&paragraph);
        }
    }
}

/// Strips class, id and inline-style attributes from every remaining
/// element.
fn strip_presentational_attributes(fragment: &ContentFragment<'_>) {
    for root in fragment.roots() {
        strip_attrs(root);
        for node in dom::descendants_by_tag(root, "*") {
            strip_attrs(&node);
        }
    }
}

fn strip_attrs(node: &NodeRef) {
    dom::remove_attr(node, "class");
    dom::remove_attr(node, "id");
    dom::remove_attr(node, "style");
}

/// Conditional cleaning for a tag kind: removes nodes whose composite of
/// class weight, recorded score, element-count ratios and link density marks
/// them as boilerplate.
fn clean_conditionally(
    fragment: &mut ContentFragment<'_>,
    candidates: &CandidateMap<'_>,
    tag: &str,
) {
    let mut removed: HashSet<NodeId> = HashSet::new();

    for node in fragment.elements_by_tag(tag) {
        // skip nodes already detached with an earlier removal
        if removed.contains(&node.id) || has_removed_ancestor(&node, &removed) {
            continue;
        }

        let weight = class_weight(&node);
        let score = candidates.get(&node.id).map_or(0.0, |c| c.score);

        if weight + score < 0.0 || should_remove_by_counts(&node, tag, weight) {
            removed.insert(node.id);
            fragment.remove_node(&node);
        }
    }
}

fn has_removed_ancestor(node: &NodeRef, removed: &HashSet<NodeId>) -> bool {
    node.ancestors(None).iter().any(|anc| removed.contains(&anc.id))
}

/// The count-ratio heuristics of conditional cleaning. Returns true when any
/// removal condition holds.
fn should_remove_by_counts(node: &NodeRef, tag: &str, weight: f64) -> bool {
    let paragraphs = dom::count_descendants(node, "p") as i64;
    let images = dom::count_descendants(node, "img") as i64;
    let list_items = dom::count_descendants(node, "li") as i64 - 100;
    let inputs = dom::count_descendants(node, "input") as i64;
    let embeds = non_video_embed_count(node);
    let density = link_density(node);
    let text_length = dom::text_len(node);

    if images > paragraphs && !has_figure_ancestor(node) {
        return true;
    }
    if list_items > paragraphs && tag != "ul" && tag != "ol" {
        return true;
    }
    if inputs > paragraphs / 3 {
        return true;
    }
    if text_length < 25 && (images == 0 || images > 2) {
        return true;
    }
    if weight < 25.0 && density > 0.2 {
        return true;
    }
    if weight >= 25.0 && density > 0.5 {
        return true;
    }
    if (embeds == 1 && text_length < 35) || embeds > 1 {
        return true;
    }
    false
}

/// Embeds whose attributes do not reference a known video host.
fn non_video_embed_count(node: &NodeRef) -> i64 {
    let mut count = 0;
    for embed in dom::descendants_by_tag(node, "embed") {
        if !VIDEO_HOSTS.is_match(&dom::all_attribute_values(&embed)) {
            count += 1;
        }
    }
    count
}

/// True when an ancestor within [`FIGURE_ANCESTOR_LEVELS`] levels is a
/// `figure`; image galleries inside figures are content, not decoration.
fn has_figure_ancestor(node: &NodeRef) -> bool {
    let mut current = node.parent();
    for _ in 0..FIGURE_ANCESTOR_LEVELS {
        let Some(ancestor) = current else {
            return false;
        };
        if dom::is_tag(&ancestor, "figure") {
            return true;
        }
        current = ancestor.parent();
    }
    false
}
