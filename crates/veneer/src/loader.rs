//! Stylesheet Loader
//!
//! Load signals for external stylesheets. A signal settles exactly once,
//! with success or an error; the style gate treats both as "settled".

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use url::Url;

/// Settlement of one stylesheet load
pub type LoadSignal = Pin<Box<dyn Future<Output = Result<(), StylesheetError>>>>;

/// Source of stylesheet load signals
pub trait StylesheetLoader {
    /// Start loading `href`; the returned signal settles when it is done
    fn load(&self, href: &str) -> LoadSignal;
}

/// Stylesheet load errors
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    #[error("invalid base URL: {0}")]
    InvalidBase(String),

    #[error("invalid stylesheet href {href:?}: {source}")]
    InvalidHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {scheme:?} for stylesheet {href:?}")]
    UnsupportedScheme { href: String, scheme: String },

    #[error("failed to read stylesheet {href:?}: {source}")]
    Io {
        href: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stylesheet {href:?} failed to load: {reason}")]
    Failed { href: String, reason: String },
}

/// Loader whose signals settle successfully as soon as they are polled
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateLoader;

impl StylesheetLoader for ImmediateLoader {
    fn load(&self, _href: &str) -> LoadSignal {
        Box::pin(async { Ok(()) })
    }
}

/// Loads `file:` stylesheets relative to a base URL
#[derive(Debug, Clone)]
pub struct FileStylesheetLoader {
    base: Url,
}

impl FileStylesheetLoader {
    /// Resolve hrefs against `base` (usually the document URL)
    pub fn new(base: &str) -> Result<Self, StylesheetError> {
        let base = Url::parse(base).map_err(|e| StylesheetError::InvalidBase(e.to_string()))?;
        Ok(Self { base })
    }

    /// Resolve hrefs against a directory on disk
    pub fn from_directory(dir: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let dir = dir.as_ref();
        let base = Url::from_directory_path(dir)
            .map_err(|_| StylesheetError::InvalidBase(dir.display().to_string()))?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for `href`
    pub fn resolve(&self, href: &str) -> Result<Url, StylesheetError> {
        self.base.join(href).map_err(|source| StylesheetError::InvalidHref {
            href: href.to_string(),
            source,
        })
    }
}

impl StylesheetLoader for FileStylesheetLoader {
    fn load(&self, href: &str) -> LoadSignal {
        let resolved = self.resolve(href);
        let href = href.to_string();

        Box::pin(async move {
            let url = resolved?;
            if url.scheme() != "file" {
                return Err(StylesheetError::UnsupportedScheme {
                    href,
                    scheme: url.scheme().to_string(),
                });
            }
            let path = url.to_file_path().map_err(|_| StylesheetError::Failed {
                href: href.clone(),
                reason: format!("{url} has no local path"),
            })?;

            let css = smol::fs::read_to_string(&path)
                .await
                .map_err(|source| StylesheetError::Io {
                    href: href.clone(),
                    source,
                })?;
            tracing::debug!(href = %href, bytes = css.len(), "stylesheet loaded");
            Ok(())
        })
    }
}
