//! Component element
//!
//! A constructed component instance: its host attributes, its own shadow
//! tree, the primary state slot, and the lifecycle entry points the host
//! platform calls.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use smol::LocalExecutor;
use veneer_dom::{DomResult, ElementData, ShadowRoot, ShadowRootMode};

use crate::gate::StyleGate;
use crate::state::StateSlot;
use crate::{Component, ComponentClass, RenderContext, StateCell, StylesheetLoader};

/// Lifecycle phase of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed, not yet in the document
    #[default]
    Constructed,
    /// Connected to the document
    Attached,
    /// Removed from the document
    Detached,
}

/// A live component instance
pub struct ComponentElement<C: Component> {
    class: Rc<ComponentClass<C>>,
    host: ElementData,
    shadow_root: Rc<RefCell<ShadowRoot>>,
    state: StateSlot<C::State>,
    component: C,
    phase: Phase,
    style_gate: Option<Rc<StyleGate>>,
}

impl<C: Component> ComponentElement<C> {
    /// Attach a shadow root, stamp the class template into it and, if the
    /// class asks for it, hide the host until its stylesheets settle.
    ///
    /// Does not render; the first render comes from `connected_callback`.
    pub(crate) fn new(
        class: Rc<ComponentClass<C>>,
        component: C,
        loader: &dyn StylesheetLoader,
        executor: &LocalExecutor<'static>,
    ) -> DomResult<Self> {
        let descriptor = class.descriptor();
        let mut shadow = ShadowRoot::new(descriptor.shadow_options);
        shadow.append_fragment(class.template())?;
        let shadow_root = Rc::new(RefCell::new(shadow));

        let style_gate = if descriptor.display_after_styles_loaded {
            Some(StyleGate::install(
                &descriptor.tag_name,
                &shadow_root,
                loader,
                executor,
            )?)
        } else {
            None
        };

        tracing::debug!(tag = %descriptor.tag_name, "element constructed");
        let host = ElementData::new(descriptor.tag_name.clone());

        Ok(Self {
            host,
            class,
            shadow_root,
            state: StateSlot::default(),
            component,
            phase: Phase::Constructed,
            style_gate,
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.host.tag
    }

    pub fn class(&self) -> &Rc<ComponentClass<C>> {
        &self.class
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Attribute on the host element
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.host.get_attr(name)
    }

    /// The shadow root, unless it was attached in closed mode
    ///
    /// Holding the returned borrow across executor ticks is fine; a hide
    /// rule that could not be removed meanwhile goes on the next access.
    pub fn shadow_root(&self) -> Option<Ref<'_, ShadowRoot>> {
        self.flush_style_gate();
        let shadow = self.shadow_root.borrow();
        match shadow.mode {
            ShadowRootMode::Open => Some(shadow),
            ShadowRootMode::Closed => None,
        }
    }

    /// True while the host is hidden waiting for stylesheets
    pub fn is_hidden(&self) -> bool {
        self.flush_style_gate();
        self.style_gate.as_ref().is_some_and(|gate| gate.is_hiding())
    }

    /// Stylesheet loads the element is still waiting on
    pub fn pending_stylesheets(&self) -> usize {
        self.style_gate.as_ref().map_or(0, |gate| gate.pending())
    }

    pub fn state(&self) -> &C::State {
        &self.state.current
    }

    pub fn previous_state(&self) -> &C::State {
        &self.state.previous
    }

    /// Replace the primary state and render, unless the value is unchanged
    pub fn set_state(&mut self, new: C::State) -> bool {
        if !self.state.replace(new, C::state_eq) {
            return false;
        }
        self.render();
        true
    }

    /// Write a state cell selected from the component and run its render
    /// callback, unless the value is unchanged
    pub fn mutate<T>(
        &mut self,
        select: impl FnOnce(&mut C) -> &mut StateCell<C, T>,
        new: T,
    ) -> bool {
        let cell = select(&mut self.component);
        if !cell.shift(new) {
            return false;
        }
        match cell.render_callback() {
            Some(partial) => self.with_context(|component, cx| partial(component, cx)),
            None => self.render(),
        }
        true
    }

    /// Run the component's render
    pub fn render(&mut self) {
        tracing::trace!(tag = %self.host.tag, "render");
        self.with_context(|component, cx| component.render(cx));
    }

    /// The element was inserted into the document
    pub fn connected_callback(&mut self) {
        self.phase = Phase::Attached;
        self.with_context(|component, cx| component.connected(cx));
    }

    /// The element was removed from the document; no component hook runs
    pub fn disconnected_callback(&mut self) {
        self.phase = Phase::Detached;
    }

    /// Deliver an attribute change to the component
    pub fn attribute_changed_callback(
        &mut self,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        self.with_context(|component, cx| {
            component.attribute_changed(cx, name, old_value, new_value)
        });
    }

    /// Set a host attribute; observed attributes notify the component
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let old = self.host.set_attr(name, value);
        if self.class.observes(name) {
            self.attribute_changed_callback(name, old.as_deref(), Some(value));
        }
    }

    /// Remove a host attribute; observed attributes notify the component
    pub fn remove_attribute(&mut self, name: &str) {
        let Some(old) = self.host.remove_attr(name) else {
            return;
        };
        if self.class.observes(name) {
            self.attribute_changed_callback(name, Some(&old), None);
        }
    }

    fn flush_style_gate(&self) {
        if let Some(gate) = &self.style_gate {
            gate.flush();
        }
    }

    fn with_context<R>(&mut self, f: impl FnOnce(&mut C, &mut RenderContext<'_, C>) -> R) -> R {
        self.flush_style_gate();
        let mut shadow = self.shadow_root.borrow_mut();
        let mut cx = RenderContext {
            host: &self.host,
            shadow_root: &mut *shadow,
            state: &self.state.current,
            previous_state: &self.state.previous,
        };
        f(&mut self.component, &mut cx)
    }
}

impl<C: Component> fmt::Debug for ComponentElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentElement")
            .field("tag", &self.host.tag)
            .field("phase", &self.phase)
            .field("hidden", &self.is_hidden())
            .finish()
    }
}
