//! Document - High-level document API

use crate::{DomResult, DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <head> element
    head_element: NodeId,
}

impl Document {
    /// Create a new document with an html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes cannot violate the hierarchy
        let _ = tree.append_child(NodeId::ROOT, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            head_element: head,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Append a node to <head>
    pub fn append_to_head(&mut self, node: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(self.head_element, node)
    }

    /// Markup currently inside <head>
    pub fn head_html(&self) -> String {
        self.tree.inner_html(self.head_element)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_skeleton() {
        let doc = Document::default();
        assert_eq!(doc.url(), "about:blank");
        assert_eq!(
            doc.tree().inner_html(NodeId::ROOT),
            "<html><head></head><body></body></html>"
        );
        assert_eq!(doc.head_html(), "");
    }

    #[test]
    fn test_append_to_head() {
        let mut doc = Document::new("file:///app/index.html");
        let style = doc.tree_mut().create_element("style");
        doc.append_to_head(style).unwrap();
        assert_eq!(doc.head_html(), "<style></style>");
    }
}
