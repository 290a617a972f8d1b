//! DOM operations adapter.
//!
//! Thin named-operation layer over the `dom_query` crate, the external
//! DOM-builder collaborator. The rest of the pipeline goes through these
//! helpers so the parser stays behind one seam. Node identity throughout the
//! crate is `dom_query::NodeId`, assigned at tree-construction time and
//! independent of content, so distinct nodes never alias and identity
//! survives in-place mutation.

pub use dom_query::{Document, NodeId, NodeRef, Selection};
pub use tendril::StrTendril;

/// Parse preprocessed markup into a document tree.
///
/// Parsing is best-effort: malformed markup degrades to whatever the parser
/// recovers, it never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Tag name of an element node, lowercase.
#[inline]
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    node.node_name()
}

/// True when the node is an element with the given tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Attribute value of a node, if present.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|v| v.to_string())
}

/// Concatenated id and class attribute text, the input to both the unlikely
/// candidate check and class weighting.
#[must_use]
pub fn id_class_text(node: &NodeRef) -> String {
    let mut out = attr(node, "id").unwrap_or_default();
    if let Some(class) = attr(node, "class") {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&class);
    }
    out
}

/// Every attribute value of a node, concatenated. Used to probe embeds for
/// video-host references.
#[must_use]
pub fn all_attribute_values(node: &NodeRef) -> String {
    let mut out = String::new();
    for a in node.attrs().iter() {
        out.push_str(&a.value);
        out.push(' ');
    }
    out
}

/// Visible text of a node's subtree.
#[inline]
#[must_use]
pub fn text(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Character count of a node's visible text.
#[inline]
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    node.text().chars().count()
}

/// Serialized inner contents of a node.
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

/// Serialized node including its own tag.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

/// Detach a node and its subtree from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    Selection::from(*node).remove();
}

/// Rename an element in place, keeping attributes and children.
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Strip a presentational attribute if present.
#[inline]
pub fn remove_attr(node: &NodeRef, name: &str) {
    Selection::from(*node).remove_attr(name);
}

/// Set an attribute value.
#[inline]
pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    Selection::from(*node).set_attr(name, value);
}

/// All elements of the document in document order (depth-first, pre-order).
#[must_use]
pub fn document_elements(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select("*").nodes().to_vec()
}

/// Descendant elements of a node matching a tag selector, in document order.
#[must_use]
pub fn descendants_by_tag<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(tag).nodes().to_vec()
}

/// Number of descendant elements matching a tag selector.
#[inline]
#[must_use]
pub fn count_descendants(node: &NodeRef, tag: &str) -> usize {
    Selection::from(*node).select(tag).length()
}
