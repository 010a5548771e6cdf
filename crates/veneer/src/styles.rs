//! Stylesheet nodes and the global style registry
//!
//! Shadow-scoped sheets are written into the class template; light-DOM
//! sheets go to the document head through [`GlobalStyleRegistry`], the only
//! place the component base touches global state.

use veneer_dom::{Document, DomResult, DomTree, NodeId};

use crate::StyleSheetPaths;

/// Global (document-level) stylesheet sink
pub trait GlobalStyleRegistry {
    /// Append `<link rel="stylesheet" href=...>`
    fn append_stylesheet_link(&mut self, href: &str) -> DomResult<()>;

    /// Append `<style>` holding `css`
    fn append_style(&mut self, css: &str) -> DomResult<()>;
}

impl GlobalStyleRegistry for Document {
    fn append_stylesheet_link(&mut self, href: &str) -> DomResult<()> {
        let link = stylesheet_link(self.tree_mut(), href);
        self.append_to_head(link)?;
        Ok(())
    }

    fn append_style(&mut self, css: &str) -> DomResult<()> {
        let style = style_element(self.tree_mut(), css)?;
        self.append_to_head(style)?;
        Ok(())
    }
}

/// Create a detached `<link rel="stylesheet">`
pub(crate) fn stylesheet_link(tree: &mut DomTree, href: &str) -> NodeId {
    tree.create_element_with_attrs("link", &[("rel", "stylesheet"), ("href", href)])
}

/// Create a detached `<style>` element
pub(crate) fn style_element(tree: &mut DomTree, css: &str) -> DomResult<NodeId> {
    let style = tree.create_element("style");
    let text = tree.create_text(css);
    tree.append_child(style, text)?;
    Ok(style)
}

/// Create link nodes for `paths` followed by a style node for `inline`,
/// the order they are inserted in
pub(crate) fn stylesheet_nodes(
    tree: &mut DomTree,
    paths: &StyleSheetPaths,
    inline: Option<&str>,
) -> DomResult<Vec<NodeId>> {
    let mut nodes: Vec<NodeId> = paths.iter().map(|href| stylesheet_link(tree, href)).collect();
    if let Some(css) = inline.filter(|css| !css.is_empty()) {
        nodes.push(style_element(tree, css)?);
    }
    Ok(nodes)
}

/// Write light-DOM sheets to the global registry: links first, then inline.
/// Returns how many nodes were appended.
pub(crate) fn append_global_styles(
    registry: &mut dyn GlobalStyleRegistry,
    paths: &StyleSheetPaths,
    inline: Option<&str>,
) -> DomResult<usize> {
    let mut appended = 0;
    for href in paths.iter() {
        registry.append_stylesheet_link(href)?;
        appended += 1;
    }
    if let Some(css) = inline.filter(|css| !css.is_empty()) {
        registry.append_style(css)?;
        appended += 1;
    }
    Ok(appended)
}

/// Parse inline CSS and log problems; the text is used as written either way
pub(crate) fn validate_inline_css(tag: &str, scope: &str, css: &str) -> bool {
    use lightningcss::stylesheet::{ParserOptions, StyleSheet};

    match StyleSheet::parse(css, ParserOptions::default()) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(tag, scope, error = %err, "inline stylesheet does not parse");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_nodes_order() {
        let mut tree = DomTree::new();
        let paths = StyleSheetPaths::from(["a.css", "b.css"]);
        let nodes = stylesheet_nodes(&mut tree, &paths, Some(".x{}")).unwrap();
        for &node in &nodes {
            tree.append_child(tree.root(), node).unwrap();
        }

        assert_eq!(
            tree.inner_html(tree.root()),
            r#"<link rel="stylesheet" href="a.css"><link rel="stylesheet" href="b.css"><style>.x{}</style>"#
        );
    }

    #[test]
    fn test_empty_inline_skipped() {
        let mut tree = DomTree::new();
        let nodes = stylesheet_nodes(&mut tree, &StyleSheetPaths::new(), Some("")).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_document_registry() {
        let mut doc = Document::default();
        let appended =
            append_global_styles(&mut doc, &StyleSheetPaths::from("light.css"), Some("p{}")).unwrap();
        assert_eq!(appended, 2);
        assert_eq!(
            doc.head_html(),
            r#"<link rel="stylesheet" href="light.css"><style>p{}</style>"#
        );
    }

    #[test]
    fn test_validate_inline_css() {
        assert!(validate_inline_css("x-a", "shadow", "div { display: block; }"));
        assert!(!validate_inline_css("x-a", "shadow", "p[ { color: red; }"));
    }
}
