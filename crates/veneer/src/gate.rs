//! Style gate
//!
//! Keeps a freshly constructed element hidden until every stylesheet link
//! in its shadow tree has settled. One detached task per link waits on its
//! load signal; whichever settles last removes the hiding rule. A failed
//! load counts as settled. A link that never settles keeps the element
//! hidden; there is no timeout.
//!
//! If the shadow root is borrowed when the last load settles, the rule is
//! removed on the element's next access instead.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use smol::LocalExecutor;
use veneer_dom::{DomResult, NodeId, ShadowRoot};

use crate::StylesheetLoader;
use crate::styles::style_element;

/// Rule hiding the host while stylesheets load
pub(crate) const HIDE_HOST_CSS: &str = ":host { display: none !important; }";

#[derive(Debug)]
pub(crate) struct StyleGate {
    tag: String,
    root: Weak<RefCell<ShadowRoot>>,
    hide_rule: NodeId,
    pending: Cell<usize>,
    released: Cell<bool>,
    rule_attached: Cell<bool>,
}

impl StyleGate {
    /// Hide the host and start waiting on every stylesheet link in `root`
    pub(crate) fn install(
        tag: &str,
        root: &Rc<RefCell<ShadowRoot>>,
        loader: &dyn StylesheetLoader,
        executor: &LocalExecutor<'static>,
    ) -> DomResult<Rc<StyleGate>> {
        let (hide_rule, links) = {
            let mut shadow = root.borrow_mut();
            let rule = style_element(shadow.tree_mut(), HIDE_HOST_CSS)?;
            shadow.prepend_child(rule)?;
            (rule, shadow.stylesheet_links())
        };

        let gate = Rc::new(StyleGate {
            tag: tag.to_string(),
            root: Rc::downgrade(root),
            hide_rule,
            pending: Cell::new(links.len()),
            released: Cell::new(false),
            rule_attached: Cell::new(true),
        });
        tracing::debug!(tag, pending = links.len(), "element hidden until stylesheets settle");

        // Nothing to wait for: reveal on the next tick, never inline
        if links.is_empty() {
            let gate = Rc::clone(&gate);
            executor.spawn(async move { gate.release() }).detach();
        }

        for (_, href) in links {
            let signal = loader.load(&href);
            let gate = Rc::clone(&gate);
            executor
                .spawn(async move {
                    if let Err(err) = signal.await {
                        tracing::warn!(tag = %gate.tag, href = %href, error = %err, "stylesheet failed to load");
                    }
                    gate.settle();
                })
                .detach();
        }

        Ok(gate)
    }

    /// Loads still outstanding
    pub(crate) fn pending(&self) -> usize {
        self.pending.get()
    }

    /// True while the hide rule is still in the shadow tree
    pub(crate) fn is_hiding(&self) -> bool {
        self.rule_attached.get()
    }

    fn settle(&self) {
        let left = self.pending.get().saturating_sub(1);
        self.pending.set(left);
        if left == 0 {
            self.release();
        }
    }

    fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        tracing::debug!(tag = %self.tag, "stylesheets settled");
        self.flush();
    }

    /// Remove the hide rule once released, unless the shadow root is
    /// borrowed right now
    pub(crate) fn flush(&self) {
        if !self.released.get() || !self.rule_attached.get() {
            return;
        }
        let Some(root) = self.root.upgrade() else {
            tracing::trace!(tag = %self.tag, "element dropped before its stylesheets settled");
            return;
        };
        let Ok(mut shadow) = root.try_borrow_mut() else {
            tracing::trace!(tag = %self.tag, "shadow root borrowed, hide rule removal deferred");
            return;
        };
        self.rule_attached.set(false);
        if !shadow.contains(self.hide_rule) {
            tracing::debug!(tag = %self.tag, "hide rule already gone");
            return;
        }
        if let Err(err) = shadow.remove_child(self.hide_rule) {
            tracing::warn!(tag = %self.tag, error = %err, "failed to remove hide rule");
            return;
        }
        tracing::debug!(tag = %self.tag, "element displayed");
    }
}
