//! Custom Elements
//!
//! Registry mapping tag names to component constructors.

use std::any::TypeId;
use std::collections::HashMap;

/// Names reserved by SVG and MathML
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Custom elements registry
#[derive(Debug, Default)]
pub struct CustomElementRegistry {
    definitions: HashMap<String, CustomElementDefinition>,
    constructors: HashMap<TypeId, String>,
}

/// Custom element definition
#[derive(Debug, Clone)]
pub struct CustomElementDefinition {
    pub name: String,
    pub constructor: TypeId,
    pub observed_attributes: Vec<String>,
}

impl CustomElementDefinition {
    /// Whether changes to `attribute` are delivered to the element
    pub fn observes(&self, attribute: &str) -> bool {
        self.observed_attributes.iter().any(|a| a == attribute)
    }
}

/// Custom element options
#[derive(Debug, Clone, Default)]
pub struct CustomElementOptions {
    pub observed_attributes: Vec<String>,
}

/// Custom element errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomElementError {
    #[error("\"{0}\" is not a valid custom element name")]
    InvalidName(String),
    #[error("the name \"{0}\" has already been used with this registry")]
    AlreadyDefined(String),
    #[error("this constructor has already been used with this registry (as \"{0}\")")]
    ConstructorAlreadyDefined(String),
}

impl CustomElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a definition without registering it
    pub fn check(&self, name: &str, constructor: TypeId) -> Result<(), CustomElementError> {
        if !Self::is_valid_name(name) {
            return Err(CustomElementError::InvalidName(name.to_string()));
        }
        if self.definitions.contains_key(name) {
            return Err(CustomElementError::AlreadyDefined(name.to_string()));
        }
        if let Some(existing) = self.constructors.get(&constructor) {
            return Err(CustomElementError::ConstructorAlreadyDefined(existing.clone()));
        }
        Ok(())
    }

    /// Define a custom element
    pub fn define(
        &mut self,
        name: &str,
        constructor: TypeId,
        options: CustomElementOptions,
    ) -> Result<&CustomElementDefinition, CustomElementError> {
        self.check(name, constructor)?;

        let definition = CustomElementDefinition {
            name: name.to_string(),
            constructor,
            observed_attributes: options.observed_attributes,
        };
        self.constructors.insert(constructor, name.to_string());
        tracing::debug!(name, "custom element defined");

        let definition: &CustomElementDefinition =
            self.definitions.entry(name.to_string()).or_insert(definition);
        Ok(definition)
    }

    /// Get element definition
    pub fn get(&self, name: &str) -> Option<&CustomElementDefinition> {
        self.definitions.get(name)
    }

    /// Check if element is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validate custom element name
    pub fn is_valid_name(name: &str) -> bool {
        // Must start with lowercase letter
        if !name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
            return false;
        }

        // Must contain hyphen
        if !name.contains('-') {
            return false;
        }

        let forbidden = |c: char| {
            c.is_ascii_uppercase()
                || c.is_whitespace()
                || matches!(c, '/' | '>' | '<' | '"' | '\'' | '=' | '\0')
        };
        if name.chars().any(forbidden) {
            return false;
        }

        !RESERVED_NAMES.contains(&name)
    }
}
