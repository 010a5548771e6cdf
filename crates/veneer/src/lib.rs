//! Veneer
//!
//! A small base for encapsulated, self-styling components built on shadow
//! trees.
//!
//! A component type is described once by a [`ComponentDescriptor`] and
//! defined with [`Host::define`], which builds the shared template,
//! injects stylesheets and registers the tag. Every instance created from
//! the returned [`ComponentClass`] gets its own shadow tree stamped from
//! that template, a primary state slot, and any number of [`StateCell`]s;
//! changing either re-renders synchronously.
//!
//! # Example
//! ```rust,ignore
//! use veneer::{Component, ComponentDescriptor, Host, RenderContext};
//!
//! #[derive(Default)]
//! struct Badge;
//!
//! impl Component for Badge {
//!     type State = u32;
//!
//!     fn state_eq(current: &u32, new: &u32) -> bool {
//!         current == new
//!     }
//!
//!     fn render(&mut self, cx: &mut RenderContext<'_, Self>) {
//!         let count = *cx.state();
//!         cx.set_text("count", &count.to_string());
//!     }
//! }
//!
//! let mut host = Host::default();
//! let class = host.define::<Badge>(
//!     ComponentDescriptor::new("x-badge")
//!         .template("<span id=\"count\"></span>")
//!         .style_sheet(":host { font-weight: bold; }"),
//! )?;
//! let mut badge = host.create(&class, Badge)?;
//! badge.connected_callback();
//! badge.set_state(3);
//! ```

mod config;
mod error;
mod descriptor;
mod styles;
mod class;
mod component;
mod state;
mod gate;
mod element;
mod loader;
mod host;

pub use config::Config;
pub use error::DefineError;
pub use descriptor::{ComponentDescriptor, StyleSheetPaths};
pub use styles::GlobalStyleRegistry;
pub use class::ComponentClass;
pub use component::{Component, RenderContext};
pub use state::{PartialRender, StateCell};
pub use element::{ComponentElement, Phase};
pub use loader::{
    FileStylesheetLoader, ImmediateLoader, LoadSignal, StylesheetError, StylesheetLoader,
};
pub use host::Host;

// Re-export the primitives components work with
pub use veneer_dom as dom;
pub use veneer_dom::{ShadowRoot, ShadowRootInit, ShadowRootMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
