//! The gathered content fragment.
//!
//! Sibling gathering does not move nodes between trees: the fragment is an
//! ordered list of root handles that stay attached to the live document, so
//! candidate scores recorded by `NodeId` remain consultable during
//! conditional cleaning. Serialization concatenates the roots in document
//! order.

use crate::dom::{self, NodeRef};

/// Ordered roots of the selected article content, still attached to the
/// document tree.
#[derive(Debug, Clone, Default)]
pub struct ContentFragment<'a> {
    roots: Vec<NodeRef<'a>>,
}

impl<'a> ContentFragment<'a> {
    /// Fragment over the given roots, in document order.
    #[must_use]
    pub fn new(roots: Vec<NodeRef<'a>>) -> Self {
        Self { roots }
    }

    /// Fragment with no content, the "no extractable article" result.
    #[must_use]
    pub fn empty() -> Self {
        Self { roots: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[must_use]
    pub fn roots(&self) -> &[NodeRef<'a>] {
        &self.roots
    }

    /// Matching elements across the fragment: each root itself plus its
    /// descendants, in document order.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        for root in &self.roots {
            if dom::is_tag(root, tag) {
                out.push(*root);
            }
            out.extend(dom::descendants_by_tag(root, tag));
        }
        out
    }

    /// Number of matching elements across the fragment.
    #[must_use]
    pub fn count(&self, tag: &str) -> usize {
        self.elements_by_tag(tag).len()
    }

    /// Detach a node from the tree; if it is one of the fragment roots it is
    /// dropped from the fragment as well.
    pub fn remove_node(&mut self, node: &NodeRef<'a>) {
        self.roots.retain(|root| root.id != node.id);
        dom::remove(node);
    }

    /// Concatenated visible text of all roots.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            out.push_str(&dom::text(root));
        }
        out
    }

    /// Serialized markup of the fragment.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            out.push_str(&dom::outer_html(root));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn elements_by_tag_includes_roots_themselves() {
        let doc = parse("<div><p>a</p></div><p>b</p>");
        let roots = doc.select("body > *").nodes().to_vec();
        let frag = ContentFragment::new(roots);
        // one root is itself a <p>, the other contains one
        assert_eq!(frag.count("p"), 2);
    }

    #[test]
    fn remove_node_drops_fragment_roots() {
        let doc = parse("<div>a</div><span>b</span>");
        let roots = doc.select("body > *").nodes().to_vec();
        let mut frag = ContentFragment::new(roots);
        let span = doc.select("span").nodes().first().copied().expect("span");
        frag.remove_node(&span);
        assert_eq!(frag.roots().len(), 1);
        assert!(!frag.serialize().contains("span"));
    }

    #[test]
    fn serialize_concatenates_roots_in_order() {
        let doc = parse("<p>first</p><p>second</p>");
        let roots = doc.select("p").nodes().to_vec();
        let frag = ContentFragment::new(roots);
        assert_eq!(frag.serialize(), "<p>first</p><p>second</p>");
        assert_eq!(frag.text(), "firstsecond");
    }

    #[test]
    fn empty_fragment_yields_empty_output() {
        let frag = ContentFragment::empty();
        assert!(frag.is_empty());
        assert_eq!(frag.serialize(), "");
        assert_eq!(frag.text(), "");
    }
}
