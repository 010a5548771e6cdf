//! Component class
//!
//! One-time definition of a component type. Defining validates the tag
//! against the registry first, so a rejected definition leaves the
//! document head untouched; it then builds the shared template
//! (stylesheet links, inline style, template markup), appends light-DOM
//! sheets to the global registry and registers the tag.

use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use smol::LocalExecutor;
use veneer_dom::{
    CustomElementDefinition, CustomElementOptions, CustomElementRegistry, DocumentFragment,
    DomResult,
};

use crate::element::ComponentElement;
use crate::styles::{append_global_styles, stylesheet_nodes, validate_inline_css};
use crate::{
    Component, ComponentDescriptor, Config, DefineError, GlobalStyleRegistry, StylesheetLoader,
};

/// A defined component type
///
/// Holds the descriptor, the registry's definition and the shared template
/// fragment. The fragment is immutable once defined; instances receive deep
/// copies.
pub struct ComponentClass<C: Component> {
    descriptor: ComponentDescriptor,
    definition: CustomElementDefinition,
    template: DocumentFragment,
    _component: PhantomData<fn() -> C>,
}

impl<C: Component> ComponentClass<C> {
    /// Run class initialization for `C`
    pub fn initialize(
        descriptor: ComponentDescriptor,
        registry: &mut CustomElementRegistry,
        styles: &mut dyn GlobalStyleRegistry,
        config: &Config,
    ) -> Result<Rc<Self>, DefineError> {
        let tag = descriptor.tag_name.clone();
        registry.check(&tag, TypeId::of::<C>())?;

        let mut template =
            veneer_html::parse_fragment(&descriptor.template).map_err(|source| {
                DefineError::Template {
                    tag: tag.clone(),
                    source,
                }
            })?;

        if config.validate_inline_styles {
            let inline = [
                ("shadow", descriptor.style_sheet.as_deref()),
                ("light", descriptor.light_dom_style_sheet.as_deref()),
            ];
            for (scope, css) in inline {
                if let Some(css) = css.filter(|css| !css.is_empty()) {
                    validate_inline_css(&tag, scope, css);
                }
            }
        }

        let style_nodes = stylesheet_nodes(
            template.tree_mut(),
            &descriptor.style_sheet_paths,
            descriptor.style_sheet.as_deref(),
        )?;
        template.prepend_all(&style_nodes)?;

        let light_sheets = append_global_styles(
            styles,
            &descriptor.light_dom_style_sheet_paths,
            descriptor.light_dom_style_sheet.as_deref(),
        )?;

        let definition = registry
            .define(
                &tag,
                TypeId::of::<C>(),
                CustomElementOptions {
                    observed_attributes: descriptor.observed_attributes.clone(),
                },
            )?
            .clone();

        tracing::debug!(
            tag = %tag,
            shadow_sheets = style_nodes.len(),
            light_sheets,
            "component defined"
        );

        Ok(Rc::new(Self {
            descriptor,
            definition,
            template,
            _component: PhantomData,
        }))
    }

    pub fn descriptor(&self) -> &ComponentDescriptor {
        &self.descriptor
    }

    pub fn tag_name(&self) -> &str {
        &self.descriptor.tag_name
    }

    /// The shared template every instance is stamped from
    pub fn template(&self) -> &DocumentFragment {
        &self.template
    }

    /// Registry entry for this class
    pub fn definition(&self) -> &CustomElementDefinition {
        &self.definition
    }

    /// Whether changes to `attribute` reach the attribute-change hook
    pub fn observes(&self, attribute: &str) -> bool {
        self.definition.observes(attribute)
    }

    /// Construct an instance wrapping `component`
    pub fn construct(
        self: &Rc<Self>,
        component: C,
        loader: &dyn StylesheetLoader,
        executor: &LocalExecutor<'static>,
    ) -> DomResult<ComponentElement<C>> {
        ComponentElement::new(Rc::clone(self), component, loader, executor)
    }
}

impl<C: Component> fmt::Debug for ComponentClass<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentClass")
            .field("tag_name", &self.descriptor.tag_name)
            .field("template", &self.template.to_html())
            .finish()
    }
}
