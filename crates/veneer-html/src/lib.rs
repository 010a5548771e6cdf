//! Veneer HTML Parser
//!
//! Turns component template markup into a [`DocumentFragment`] using
//! html5ever.

mod parser;

pub use parser::HtmlParser;

use veneer_dom::DocumentFragment;

/// Parse template markup into a fragment
pub fn parse_fragment(markup: &str) -> Result<DocumentFragment, ParseError> {
    HtmlParser::new().parse_fragment(markup)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build fragment: {0}")]
    Dom(#[from] veneer_dom::DomError),
}
