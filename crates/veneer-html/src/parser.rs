//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to our DOM format. Template
//! markup is parsed as a fragment in the context of a `<template>`
//! element, so table parts, leading `<link>`/`<style>` elements and
//! whitespace between inline elements all keep their place.

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, ns, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use veneer_dom::{DocumentFragment, DomTree, NodeId};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse markup into a fragment
    pub fn parse_fragment(&self, markup: &str) -> Result<DocumentFragment, ParseError> {
        let mut fragment = DocumentFragment::new();
        if markup.trim().is_empty() {
            return Ok(fragment);
        }

        let context = QualName::new(None, ns!(html), local_name!("template"));
        let dom = parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), false)
            .from_utf8()
            .read_from(&mut markup.as_bytes())?;

        for handle in Self::content_roots(&dom.document) {
            self.convert_node(&handle, fragment.tree_mut(), NodeId::ROOT)?;
        }

        tracing::trace!(nodes = fragment.tree().len(), "parsed template fragment");
        Ok(fragment)
    }

    /// Top-level nodes the markup produced; the fragment parser puts them
    /// under a synthetic `<html>` root
    fn content_roots(document: &Handle) -> Vec<Handle> {
        document
            .children
            .borrow()
            .iter()
            .filter(|child| {
                matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == "html")
            })
            .flat_map(|root| root.children.borrow().clone())
            .collect()
    }

    /// Convert an RcDom node to our DOM format
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<(), ParseError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Text { contents } => {
                let id = tree.create_text(&contents.borrow());
                tree.append_child(parent, id)?;
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let id = tree.create_element(&name.local);
                if let Some(elem) = tree.element_mut(id) {
                    for attr in attrs.borrow().iter() {
                        elem.set_attr(&attr.name.local, attr.value.to_string());
                    }
                }
                tree.append_child(parent, id)?;

                // <template> keeps its content out of the regular child list
                if let Some(contents) = template_contents.borrow().as_ref() {
                    for child in contents.children.borrow().iter() {
                        self.convert_node(child, tree, id)?;
                    }
                }

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
            }
            RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fragment() {
        let frag = HtmlParser::new()
            .parse_fragment("<div class=\"box\"><span>Text</span></div>")
            .unwrap();

        assert_eq!(frag.len(), 1);
        assert_eq!(frag.to_html(), r#"<div class="box"><span>Text</span></div>"#);
    }

    #[test]
    fn test_parse_empty() {
        let frag = HtmlParser::new().parse_fragment("   ").unwrap();
        assert!(frag.is_empty());
    }

    #[test]
    fn test_whitespace_between_inline_elements_kept() {
        let frag = HtmlParser::new().parse_fragment("<b>a</b> <i>b</i>").unwrap();
        assert_eq!(frag.len(), 3);
        assert_eq!(frag.to_html(), "<b>a</b> <i>b</i>");
    }

    #[test]
    fn test_table_parts_kept() {
        let frag = HtmlParser::new().parse_fragment("<tr><td>x</td></tr>").unwrap();
        assert_eq!(frag.to_html(), "<tr><td>x</td></tr>");
    }
}
