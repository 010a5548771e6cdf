//! State store
//!
//! The primary state slot and auxiliary state cells. Both keep the value
//! they replaced so render code can diff cheaply, and both report whether a
//! write actually changed anything; the element renders only then.

use std::fmt;

use crate::{Component, RenderContext};

/// Render callback bound to a state cell
pub type PartialRender<C> = fn(&mut C, &mut RenderContext<'_, C>);

/// Primary state with its previous value
#[derive(Debug, Default)]
pub(crate) struct StateSlot<T> {
    pub(crate) current: T,
    pub(crate) previous: T,
}

impl<T> StateSlot<T> {
    /// Install `new` unless `eq` says it matches; true when it changed
    pub(crate) fn replace(&mut self, new: T, eq: impl FnOnce(&T, &T) -> bool) -> bool {
        if eq(&self.current, &new) {
            return false;
        }
        self.previous = std::mem::replace(&mut self.current, new);
        true
    }
}

/// Independently tracked piece of component state
///
/// Cells live inside the component and are written through
/// [`ComponentElement::mutate`](crate::ComponentElement::mutate), which
/// runs the cell's render callback, or the component's `render` when the
/// cell has none.
pub struct StateCell<C: Component, T> {
    value: T,
    previous_value: Option<T>,
    render: Option<PartialRender<C>>,
    eq: fn(&T, &T) -> bool,
}

impl<C: Component, T: PartialEq> StateCell<C, T> {
    /// Create a cell holding `initial`, compared with `PartialEq`
    pub fn new(initial: T, render: Option<PartialRender<C>>) -> Self {
        Self::with_eq_fn(initial, render, <T as PartialEq>::eq)
    }
}

impl<C: Component, T> StateCell<C, T> {
    /// Create a cell holding `initial`, compared with `eq`
    pub fn with_eq_fn(
        initial: T,
        render: Option<PartialRender<C>>,
        eq: fn(&T, &T) -> bool,
    ) -> Self {
        Self {
            value: initial,
            previous_value: None,
            render,
            eq,
        }
    }

    /// Replace the comparison that decides whether a write is a change
    pub fn with_eq(mut self, eq: fn(&T, &T) -> bool) -> Self {
        self.eq = eq;
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Value before the last change; None until the first change
    pub fn previous_value(&self) -> Option<&T> {
        self.previous_value.as_ref()
    }

    pub(crate) fn render_callback(&self) -> Option<PartialRender<C>> {
        self.render
    }

    /// Shift `value` into `previous_value` and install `new`; false if equal
    pub(crate) fn shift(&mut self, new: T) -> bool {
        if (self.eq)(&self.value, &new) {
            return false;
        }
        self.previous_value = Some(std::mem::replace(&mut self.value, new));
        true
    }
}

impl<C: Component, T: fmt::Debug> fmt::Debug for StateCell<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value)
            .field("previous_value", &self.previous_value)
            .field("partial_render", &self.render.is_some())
            .finish()
    }
}
