//! Document Fragment
//!
//! A lightweight container owning its own tree. Template content is held
//! in a fragment and stamped into shadow roots by deep copy, so the
//! fragment itself is never shared with a live tree.

use crate::{DomResult, DomTree, NodeId};

/// Document fragment - parentless tree of nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFragment {
    tree: DomTree,
}

impl DocumentFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing tree; its root becomes the fragment
    pub fn from_tree(tree: DomTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Top-level nodes of the fragment
    pub fn children(&self) -> Vec<NodeId> {
        self.tree.children(NodeId::ROOT).map(|(id, _)| id).collect()
    }

    pub fn append(&mut self, node: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(NodeId::ROOT, node)
    }

    pub fn prepend(&mut self, node: NodeId) -> DomResult<NodeId> {
        self.tree.prepend_child(NodeId::ROOT, node)
    }

    /// Insert nodes ahead of the current content, keeping their given order
    pub fn prepend_all(&mut self, nodes: &[NodeId]) -> DomResult<()> {
        let anchor = self.tree.first_child(NodeId::ROOT);
        for &node in nodes {
            self.tree.insert_before(NodeId::ROOT, node, anchor)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.tree.first_child(NodeId::ROOT).is_none()
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.tree.children(NodeId::ROOT).count()
    }

    /// Markup of the fragment's content
    pub fn to_html(&self) -> String {
        self.tree.inner_html(NodeId::ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_all_keeps_order() {
        let mut frag = DocumentFragment::new();
        let body = frag.tree_mut().create_element("p");
        frag.append(body).unwrap();

        let tree = frag.tree_mut();
        let first = tree.create_element("link");
        let second = tree.create_element("style");
        frag.prepend_all(&[first, second]).unwrap();

        assert_eq!(frag.children(), vec![first, second, body]);
        assert_eq!(frag.len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut frag = DocumentFragment::new();
        let div = frag.tree_mut().create_element("div");
        frag.append(div).unwrap();

        let mut copy = frag.clone();
        copy.tree_mut().element_mut(div).unwrap().set_attr("id", "x");

        assert_eq!(frag.to_html(), "<div></div>");
        assert_eq!(copy.to_html(), r#"<div id="x"></div>"#);
    }
}
