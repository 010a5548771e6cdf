//! Shadow DOM
//!
//! Shadow root with open/closed mode. Each shadow root owns its tree, so
//! content stamped into one host never aliases another host's content.

use crate::{DocumentFragment, DomResult, DomTree, NodeId};

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Shadow root initialization options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadowRootInit {
    pub mode: ShadowRootMode,
    pub delegates_focus: bool,
}

impl ShadowRootInit {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn closed() -> Self {
        Self {
            mode: ShadowRootMode::Closed,
            ..Self::default()
        }
    }
}

/// Shadow root
#[derive(Debug, Clone)]
pub struct ShadowRoot {
    pub mode: ShadowRootMode,
    pub delegates_focus: bool,
    tree: DomTree,
}

impl ShadowRoot {
    /// Attach an empty shadow root using `init`
    pub fn new(init: ShadowRootInit) -> Self {
        Self {
            mode: init.mode,
            delegates_focus: init.delegates_focus,
            tree: DomTree::new(),
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Top-level nodes
    pub fn children(&self) -> Vec<NodeId> {
        self.tree.children(NodeId::ROOT).map(|(id, _)| id).collect()
    }

    /// Deep-copy every top-level node of `fragment` to the end of this root
    pub fn append_fragment(&mut self, fragment: &DocumentFragment) -> DomResult<()> {
        for child in fragment.children() {
            let copy = self.tree.import_subtree(fragment.tree(), child)?;
            self.tree.append_child(NodeId::ROOT, copy)?;
        }
        Ok(())
    }

    pub fn append_child(&mut self, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(NodeId::ROOT, child)
    }

    pub fn prepend_child(&mut self, child: NodeId) -> DomResult<NodeId> {
        self.tree.prepend_child(NodeId::ROOT, child)
    }

    pub fn remove_child(&mut self, child: NodeId) -> DomResult<NodeId> {
        self.tree.remove_child(NodeId::ROOT, child)
    }

    /// Check whether `id` is currently part of this shadow tree
    pub fn contains(&self, id: NodeId) -> bool {
        self.tree.is_attached(id)
    }

    /// `link[rel="stylesheet"]` elements with their `href`, in tree order
    ///
    /// Links inside `<template>` content are inert and not listed.
    pub fn stylesheet_links(&self) -> Vec<(NodeId, String)> {
        let mut links = Vec::new();
        self.collect_links(NodeId::ROOT, &mut links);
        links
    }

    fn collect_links(&self, parent: NodeId, links: &mut Vec<(NodeId, String)>) {
        for (id, node) in self.tree.children(parent) {
            let Some(elem) = node.as_element() else {
                continue;
            };
            if elem.tag == "template" {
                continue;
            }
            if elem.tag == "link" && elem.get_attr("rel") == Some("stylesheet") {
                if let Some(href) = elem.get_attr("href") {
                    links.push((id, href.to_string()));
                }
            }
            self.collect_links(id, links);
        }
    }

    /// Markup of the shadow tree
    pub fn inner_html(&self) -> String {
        self.tree.inner_html(NodeId::ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_root_modes() {
        assert_eq!(ShadowRoot::new(ShadowRootInit::open()).mode, ShadowRootMode::Open);
        assert_eq!(ShadowRoot::new(ShadowRootInit::closed()).mode, ShadowRootMode::Closed);
    }

    #[test]
    fn test_append_fragment_copies() {
        let mut frag = DocumentFragment::new();
        let p = frag.tree_mut().create_element("p");
        frag.append(p).unwrap();

        let mut shadow = ShadowRoot::new(ShadowRootInit::default());
        shadow.append_fragment(&frag).unwrap();
        let copied = shadow.children()[0];
        shadow.tree_mut().element_mut(copied).unwrap().set_attr("hidden", "");

        assert_eq!(frag.to_html(), "<p></p>");
        assert_eq!(shadow.inner_html(), r#"<p hidden=""></p>"#);
    }

    #[test]
    fn test_stylesheet_links() {
        let mut shadow = ShadowRoot::new(ShadowRootInit::default());
        let tree = shadow.tree_mut();
        let a = tree.create_element_with_attrs("link", &[("rel", "stylesheet"), ("href", "a.css")]);
        let icon = tree.create_element_with_attrs("link", &[("rel", "icon"), ("href", "i.png")]);
        let div = tree.create_element("div");
        let b = tree.create_element_with_attrs("link", &[("rel", "stylesheet"), ("href", "b.css")]);
        shadow.append_child(a).unwrap();
        shadow.append_child(icon).unwrap();
        shadow.append_child(div).unwrap();
        shadow.tree_mut().append_child(div, b).unwrap();

        assert_eq!(
            shadow.stylesheet_links(),
            vec![(a, "a.css".to_string()), (b, "b.css".to_string())]
        );
    }

    #[test]
    fn test_stylesheet_links_skip_template_content() {
        let mut shadow = ShadowRoot::new(ShadowRootInit::default());
        let tree = shadow.tree_mut();
        let template = tree.create_element("template");
        let inert = tree.create_element_with_attrs("link", &[("rel", "stylesheet"), ("href", "inert.css")]);
        let live = tree.create_element_with_attrs("link", &[("rel", "stylesheet"), ("href", "live.css")]);
        tree.append_child(template, inert).unwrap();
        shadow.append_child(template).unwrap();
        shadow.append_child(live).unwrap();

        assert_eq!(shadow.stylesheet_links(), vec![(live, "live.css".to_string())]);
    }
}
