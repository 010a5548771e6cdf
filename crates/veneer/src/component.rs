//! Component trait and render context

use veneer_dom::{ElementData, NodeId, ShadowRoot};

/// Behaviour supplied by a concrete component type
///
/// Every hook runs synchronously on the host's UI thread. `render` must be
/// safe to call repeatedly and in any order relative to state and attribute
/// changes; the most recent call wins.
///
/// The primary state needs no `PartialEq`; `state_eq` decides what counts
/// as a change, e.g. `a == b` for plain values or `Rc::ptr_eq` for shared
/// handles.
pub trait Component: Sized + 'static {
    /// Primary state; starts as `Default::default()`
    type State: Default;

    /// Equality used by the primary state setter; equal writes are no-ops
    fn state_eq(current: &Self::State, new: &Self::State) -> bool;

    /// Update the shadow tree (and anything else) from current state
    fn render(&mut self, cx: &mut RenderContext<'_, Self>) {
        let _ = cx;
    }

    /// An observed attribute changed; renders unless the value is unchanged
    fn attribute_changed(
        &mut self,
        cx: &mut RenderContext<'_, Self>,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        let _ = name;
        if old_value == new_value {
            return;
        }
        self.render(cx);
    }

    /// The element joined the document; renders
    fn connected(&mut self, cx: &mut RenderContext<'_, Self>) {
        self.render(cx);
    }
}

/// What render callbacks see of their element
pub struct RenderContext<'a, C: Component> {
    pub(crate) host: &'a ElementData,
    pub(crate) shadow_root: &'a mut ShadowRoot,
    pub(crate) state: &'a C::State,
    pub(crate) previous_state: &'a C::State,
}

impl<'a, C: Component> RenderContext<'a, C> {
    /// Tag name of the host element
    pub fn tag_name(&self) -> &str {
        &self.host.tag
    }

    /// Current attribute value on the host element
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.host.get_attr(name)
    }

    pub fn state(&self) -> &C::State {
        self.state
    }

    /// The value `state` held before its last change
    pub fn previous_state(&self) -> &C::State {
        self.previous_state
    }

    /// The element's own shadow root, whatever its mode
    pub fn shadow_root(&mut self) -> &mut ShadowRoot {
        self.shadow_root
    }

    /// First shadow element whose `id` attribute equals `id`
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.shadow_root
            .tree()
            .find_all(NodeId::ROOT, |elem| elem.get_attr("id") == Some(id))
            .into_iter()
            .next()
    }

    /// Replace the children of the element with `id` by a text node
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(target) = self.element_by_id(id) else {
            return false;
        };
        let tree = self.shadow_root.tree_mut();
        let children: Vec<NodeId> = tree.children(target).map(|(child, _)| child).collect();
        for child in children {
            let _ = tree.remove_child(target, child);
        }
        let node = tree.create_text(text);
        tree.append_child(target, node).is_ok()
    }

    /// Set an attribute on the shadow element with `id`
    pub fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(target) = self.element_by_id(id) else {
            return false;
        };
        match self.shadow_root.tree_mut().element_mut(target) {
            Some(elem) => {
                elem.set_attr(name, value);
                true
            }
            None => false,
        }
    }
}
