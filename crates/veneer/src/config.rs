//! Host Configuration

/// Host configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the document components are defined in; the file loader from
    /// `Host::with_file_loader` resolves relative stylesheet paths against it
    pub document_url: String,

    /// Parse inline stylesheets at definition time and warn on errors
    pub validate_inline_styles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_url: "about:blank".to_string(),
            validate_inline_styles: true,
        }
    }
}
