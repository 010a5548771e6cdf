//! Definition errors

use veneer_dom::{CustomElementError, DomError};
use veneer_html::ParseError;

/// Failure to define a component class; the tag stays unusable
#[derive(Debug, thiserror::Error)]
pub enum DefineError {
    #[error("registration failed: {0}")]
    Registry(#[from] CustomElementError),

    #[error("invalid template for <{tag}>: {source}")]
    Template {
        tag: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to assemble template: {0}")]
    Dom(#[from] DomError),
}
