//! Component Descriptor
//!
//! Static, declarative description of a component type: its tag, shadow
//! template, stylesheets and shadow options.

use veneer_dom::ShadowRootInit;

/// Ordered stylesheet references
///
/// Converts from a single path or a list of paths; a single path is the
/// same as a one-element list. Empty strings are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheetPaths(Vec<String>);

impl StyleSheetPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn collect_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(Into::into)
                .filter(|path: &String| !path.is_empty())
                .collect(),
        )
    }
}

impl From<&str> for StyleSheetPaths {
    fn from(path: &str) -> Self {
        Self::collect_paths([path])
    }
}

impl From<String> for StyleSheetPaths {
    fn from(path: String) -> Self {
        Self::collect_paths([path])
    }
}

impl<S: Into<String>> From<Vec<S>> for StyleSheetPaths {
    fn from(paths: Vec<S>) -> Self {
        Self::collect_paths(paths)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for StyleSheetPaths {
    fn from(paths: [S; N]) -> Self {
        Self::collect_paths(paths)
    }
}

/// Component class descriptor
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// Tag name the component is registered under
    pub tag_name: String,
    /// Static shadow tree markup shared by all instances
    pub template: String,
    /// Inline CSS scoped to the shadow tree
    pub style_sheet: Option<String>,
    /// External stylesheets scoped to the shadow tree
    pub style_sheet_paths: StyleSheetPaths,
    /// Inline CSS appended to the document head (styles slotted content)
    pub light_dom_style_sheet: Option<String>,
    /// External stylesheets appended to the document head
    pub light_dom_style_sheet_paths: StyleSheetPaths,
    /// Options for attaching the shadow root
    pub shadow_options: ShadowRootInit,
    /// Hide new instances until their shadow stylesheets have settled
    pub display_after_styles_loaded: bool,
    /// Attributes whose changes reach the attribute-change hook
    pub observed_attributes: Vec<String>,
}

impl ComponentDescriptor {
    /// Describe a component registered as `tag_name`
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            template: String::new(),
            style_sheet: None,
            style_sheet_paths: StyleSheetPaths::new(),
            light_dom_style_sheet: None,
            light_dom_style_sheet_paths: StyleSheetPaths::new(),
            shadow_options: ShadowRootInit::default(),
            display_after_styles_loaded: true,
            observed_attributes: Vec::new(),
        }
    }

    pub fn template(mut self, markup: impl Into<String>) -> Self {
        self.template = markup.into();
        self
    }

    pub fn style_sheet(mut self, css: impl Into<String>) -> Self {
        self.style_sheet = Some(css.into());
        self
    }

    pub fn style_sheet_paths(mut self, paths: impl Into<StyleSheetPaths>) -> Self {
        self.style_sheet_paths = paths.into();
        self
    }

    pub fn light_dom_style_sheet(mut self, css: impl Into<String>) -> Self {
        self.light_dom_style_sheet = Some(css.into());
        self
    }

    pub fn light_dom_style_sheet_paths(mut self, paths: impl Into<StyleSheetPaths>) -> Self {
        self.light_dom_style_sheet_paths = paths.into();
        self
    }

    pub fn shadow_options(mut self, options: ShadowRootInit) -> Self {
        self.shadow_options = options;
        self
    }

    pub fn display_after_styles_loaded(mut self, enabled: bool) -> Self {
        self.display_after_styles_loaded = enabled;
        self
    }

    pub fn observed_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.observed_attributes = names.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_dom::ShadowRootMode;

    #[test]
    fn test_defaults() {
        let desc = ComponentDescriptor::new("x-card");
        assert_eq!(desc.template, "");
        assert!(desc.display_after_styles_loaded);
        assert_eq!(desc.shadow_options.mode, ShadowRootMode::Open);
        assert!(desc.style_sheet_paths.is_empty());
    }

    #[test]
    fn test_single_path_is_one_element_list() {
        let single = ComponentDescriptor::new("x-a").style_sheet_paths("a.css");
        let list = ComponentDescriptor::new("x-a").style_sheet_paths(vec!["a.css"]);
        assert_eq!(single.style_sheet_paths, list.style_sheet_paths);
        assert_eq!(single.style_sheet_paths.len(), 1);
    }

    #[test]
    fn test_empty_paths_skipped() {
        let paths = StyleSheetPaths::from(["a.css", "", "b.css"]);
        assert_eq!(paths.iter().collect::<Vec<_>>(), vec!["a.css", "b.css"]);
        assert!(StyleSheetPaths::from("").is_empty());
    }
}
