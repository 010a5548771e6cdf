//! Veneer DOM
//!
//! The host primitives components are built on: an arena DOM tree,
//! document fragments, shadow roots, the custom element registry and
//! the document whose `<head>` receives global stylesheets.

mod node;
mod tree;
mod fragment;
mod shadow;
mod custom_elements;
mod document;
mod serialize;

pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Children, DomError, DomResult, DomTree};
pub use fragment::DocumentFragment;
pub use shadow::{ShadowRoot, ShadowRootInit, ShadowRootMode};
pub use custom_elements::{
    CustomElementDefinition, CustomElementError, CustomElementOptions, CustomElementRegistry,
};
pub use document::Document;

/// Node identifier (index into the owning tree's arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node of every tree (document, fragment or shadow root)
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
