//! Markup serialization
//!
//! Produces HTML text for a subtree. Used to compare shadow trees with the
//! template they were cloned from and to inspect the document head.

use crate::{DomTree, NodeData, NodeId};

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl DomTree {
    /// Serialize the children of `id`
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for (child, _) in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// Serialize `id` together with its children
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };

        match &node.data {
            NodeData::Root => {
                for (child, _) in self.children(id) {
                    self.write_node(child, out);
                }
            }
            NodeData::Text(text) => escape_into(text, false, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                for attr in &elem.attrs {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    escape_into(&attr.value, true, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&elem.tag.as_str()) {
                    return;
                }

                // Raw text elements keep their content verbatim
                let raw = matches!(elem.tag.as_str(), "style" | "script");
                for (child, child_node) in self.children(id) {
                    match (&child_node.data, raw) {
                        (NodeData::Text(text), true) => out.push_str(text),
                        _ => self.write_node(child, out),
                    }
                }

                out.push_str("</");
                out.push_str(&elem.tag);
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_elements_and_text() {
        let mut tree = DomTree::new();
        let div = tree.create_element_with_attrs("div", &[("title", "a \"b\"")]);
        let text = tree.create_text("1 < 2 & 3");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, text).unwrap();

        assert_eq!(
            tree.inner_html(NodeId::ROOT),
            r#"<div title="a &quot;b&quot;">1 &lt; 2 &amp; 3</div>"#
        );
    }

    #[test]
    fn test_void_and_raw_text_elements() {
        let mut tree = DomTree::new();
        let link = tree.create_element_with_attrs("link", &[("rel", "stylesheet"), ("href", "a.css")]);
        let style = tree.create_element("style");
        let css = tree.create_text("p > a { color: red; }");
        tree.append_child(tree.root(), link).unwrap();
        tree.append_child(tree.root(), style).unwrap();
        tree.append_child(style, css).unwrap();

        assert_eq!(
            tree.inner_html(NodeId::ROOT),
            r#"<link rel="stylesheet" href="a.css"><style>p > a { color: red; }</style>"#
        );
    }

    #[test]
    fn test_comment() {
        let mut tree = DomTree::new();
        let comment = tree.create_comment(" slot ");
        tree.append_child(tree.root(), comment).unwrap();
        assert_eq!(tree.outer_html(comment), "<!-- slot -->");
    }
}
