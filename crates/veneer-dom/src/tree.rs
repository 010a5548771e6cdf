//! DOM Tree (arena-based allocation)
//!
//! Removed nodes stay in the arena detached from the tree; ids are never
//! reused, so a stale [`NodeId`] can be detected with [`DomTree::is_attached`].

use crate::{ElementData, Node, NodeData, NodeId};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor or the root)
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Node is not a child of the given parent
    #[error("node {0:?} is not a child")]
    NotAChild(NodeId),
}

/// Arena-based DOM tree
///
/// `Clone` copies the whole arena, so a cloned tree shares nothing with
/// the original.
#[derive(Debug, Clone, PartialEq)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only its root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Root)],
        }
    }

    /// Root node ID
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data of a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    /// Mutable element data of a node, if it is an element
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData::new(tag.to_ascii_lowercase())))
    }

    /// Create a detached element with attributes
    pub fn create_element_with_attrs(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut elem = ElementData::new(tag.to_ascii_lowercase());
        for (name, value) in attrs {
            elem.set_attr(name, *value);
        }
        self.push(NodeData::Element(elem))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    /// First child of a node
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.first_child
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Check whether a node is reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == NodeId::ROOT {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() {
            return Err(DomError::NotFound(parent));
        }
        if self.get(child).is_none() {
            return Err(DomError::NotFound(child));
        }
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        Ok(())
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(node) => (node.parent, node.prev_sibling, node.next_sibling),
            None => return,
        };

        if let Some(prev_id) = prev {
            self.nodes[prev_id.index()].next_sibling = next;
        } else if let Some(parent_id) = parent {
            self.nodes[parent_id.index()].first_child = next;
        }

        if let Some(next_id) = next {
            self.nodes[next_id.index()].prev_sibling = prev;
        } else if let Some(parent_id) = parent {
            self.nodes[parent_id.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Append a child, moving it if it already has a parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert a child as the first child of `parent`
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let first = self.first_child(parent);
        self.insert_before(parent, child, first)
    }

    /// Insert `child` before `reference`, or at the end when `reference` is None
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        if let Some(ref_id) = reference {
            if ref_id == child {
                return Ok(child);
            }
            if self.parent(ref_id) != Some(parent) {
                return Err(DomError::NotAChild(ref_id));
            }
        }

        self.detach(child);

        let prev = match reference {
            Some(ref_id) => self.nodes[ref_id.index()].prev_sibling,
            None => self.nodes[parent.index()].last_child,
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = Some(parent);
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }

        match prev {
            Some(prev_id) => self.nodes[prev_id.index()].next_sibling = Some(child),
            None => self.nodes[parent.index()].first_child = Some(child),
        }
        match reference {
            Some(ref_id) => self.nodes[ref_id.index()].prev_sibling = Some(child),
            None => self.nodes[parent.index()].last_child = Some(child),
        }

        Ok(child)
    }

    /// Remove a child from its parent; the node stays in the arena detached
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(child).is_none() {
            return Err(DomError::NotFound(child));
        }
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild(child));
        }
        self.detach(child);
        Ok(child)
    }

    /// Iterate over the children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            current: self.first_child(id),
        }
    }

    /// All descendants of `id` in document (pre-)order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let mark = stack.len();
            stack.extend(self.children(node).map(|(child, _)| child));
            stack[mark..].reverse();
        }
        out
    }

    /// Descendant elements of `id` matching `predicate`, in document order
    pub fn find_all<F>(&self, id: NodeId, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(&ElementData) -> bool,
    {
        self.descendants(id)
            .into_iter()
            .filter(|node| self.element(*node).is_some_and(&mut predicate))
            .collect()
    }

    /// Deep-copy `src_node` of another tree into this one, detached
    pub fn import_subtree(&mut self, src: &DomTree, src_node: NodeId) -> DomResult<NodeId> {
        let data = match src.get(src_node) {
            Some(node) => node.data.clone(),
            None => return Err(DomError::NotFound(src_node)),
        };
        if matches!(data, NodeData::Root) {
            return Err(DomError::HierarchyRequest);
        }

        let copy = self.push(data);
        for (child, _) in src.children(src_node) {
            let child_copy = self.import_subtree(src, child)?;
            self.append_child(copy, child_copy)?;
        }
        Ok(copy)
    }

}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.tree.get(id)?;
        self.current = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_ids(tree: &DomTree, id: NodeId) -> Vec<NodeId> {
        tree.children(id).map(|(child, _)| child).collect()
    }

    #[test]
    fn test_append_and_prepend() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let c = tree.create_element("c");

        tree.append_child(tree.root(), b).unwrap();
        tree.append_child(tree.root(), c).unwrap();
        tree.prepend_child(tree.root(), a).unwrap();

        assert_eq!(child_ids(&tree, NodeId::ROOT), vec![a, b, c]);
        assert_eq!(tree.get(a).unwrap().next_sibling, Some(b));
        assert_eq!(tree.get(c).unwrap().prev_sibling, Some(b));
    }

    #[test]
    fn test_insert_before_moves_node() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        tree.append_child(tree.root(), a).unwrap();
        tree.append_child(tree.root(), b).unwrap();

        tree.insert_before(tree.root(), b, Some(a)).unwrap();
        assert_eq!(child_ids(&tree, NodeId::ROOT), vec![b, a]);
        assert_eq!(tree.get(NodeId::ROOT).unwrap().last_child, Some(a));
    }

    #[test]
    fn test_remove_child() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let c = tree.create_element("c");
        for id in [a, b, c] {
            tree.append_child(tree.root(), id).unwrap();
        }

        tree.remove_child(tree.root(), b).unwrap();
        assert_eq!(child_ids(&tree, NodeId::ROOT), vec![a, c]);
        assert!(!tree.is_attached(b));
        assert_eq!(tree.remove_child(tree.root(), b), Err(DomError::NotAChild(b)));
    }

    #[test]
    fn test_hierarchy_errors() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("span");
        tree.append_child(tree.root(), outer).unwrap();
        tree.append_child(outer, inner).unwrap();

        assert_eq!(tree.append_child(inner, outer), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(outer, NodeId::ROOT), Err(DomError::HierarchyRequest));
        assert_eq!(
            tree.append_child(outer, NodeId(99)),
            Err(DomError::NotFound(NodeId(99)))
        );
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let text = tree.create_text("hi");
        let span = tree.create_element("span");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, p).unwrap();
        tree.append_child(p, text).unwrap();
        tree.append_child(div, span).unwrap();

        assert_eq!(tree.descendants(NodeId::ROOT), vec![div, p, text, span]);
    }

    #[test]
    fn test_import_subtree_is_deep_copy() {
        let mut src = DomTree::new();
        let div = src.create_element_with_attrs("div", &[("class", "card")]);
        let text = src.create_text("body");
        src.append_child(src.root(), div).unwrap();
        src.append_child(div, text).unwrap();

        let mut dst = DomTree::new();
        let copy = dst.import_subtree(&src, div).unwrap();
        dst.append_child(dst.root(), copy).unwrap();
        dst.element_mut(copy).unwrap().set_attr("class", "changed");

        assert_eq!(src.element(div).unwrap().get_attr("class"), Some("card"));
        assert_eq!(dst.outer_html(copy), r#"<div class="changed">body</div>"#);
    }
}
