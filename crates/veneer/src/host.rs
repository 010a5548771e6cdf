//! Host runtime
//!
//! Stands in for the platform components run on: the document whose head
//! receives light-DOM styles, the custom element registry, the stylesheet
//! loader, and a single-threaded executor for style gate tasks.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use smol::LocalExecutor;
use veneer_dom::{CustomElementRegistry, Document, DomResult};

use crate::{
    Component, ComponentClass, ComponentDescriptor, ComponentElement, Config, DefineError,
    FileStylesheetLoader, ImmediateLoader, StylesheetError, StylesheetLoader,
};

/// Platform services for defining and constructing components
pub struct Host {
    config: Config,
    document: Document,
    registry: CustomElementRegistry,
    loader: Rc<dyn StylesheetLoader>,
    executor: LocalExecutor<'static>,
}

impl Host {
    /// Create a host with its own document and registry
    pub fn new(config: Config, loader: impl StylesheetLoader + 'static) -> Self {
        Self {
            document: Document::new(&config.document_url),
            registry: CustomElementRegistry::new(),
            loader: Rc::new(loader),
            executor: LocalExecutor::new(),
            config,
        }
    }

    /// Create a host that loads `file:` stylesheets relative to
    /// `config.document_url`
    pub fn with_file_loader(config: Config) -> Result<Self, StylesheetError> {
        let loader = FileStylesheetLoader::new(&config.document_url)?;
        Ok(Self::new(config, loader))
    }

    /// Define component type `C`; fails if the tag is invalid or taken
    pub fn define<C: Component>(
        &mut self,
        descriptor: ComponentDescriptor,
    ) -> Result<Rc<ComponentClass<C>>, DefineError> {
        let tag = descriptor.tag_name.clone();
        let result = ComponentClass::<C>::initialize(
            descriptor,
            &mut self.registry,
            &mut self.document,
            &self.config,
        );
        if let Err(err) = &result {
            tracing::error!(tag = %tag, error = %err, "component definition rejected");
        }
        result
    }

    /// Construct an element of a defined class
    pub fn create<C: Component>(
        &self,
        class: &Rc<ComponentClass<C>>,
        component: C,
    ) -> DomResult<ComponentElement<C>> {
        class.construct(component, self.loader.as_ref(), &self.executor)
    }

    /// Construct an element around `C::default()`
    pub fn create_default<C: Component + Default>(
        &self,
        class: &Rc<ComponentClass<C>>,
    ) -> DomResult<ComponentElement<C>> {
        self.create(class, C::default())
    }

    /// Run ready tasks until none are left; returns how many ran
    pub fn run_until_idle(&self) -> usize {
        let mut ticks = 0;
        while self.executor.try_tick() {
            ticks += 1;
        }
        ticks
    }

    /// Drive `future` to completion on this host's executor
    pub fn block_on<T>(&self, future: impl Future<Output = T>) -> T {
        smol::block_on(self.executor.run(future))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &CustomElementRegistry {
        &self.registry
    }

    pub fn executor(&self) -> &LocalExecutor<'static> {
        &self.executor
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(Config::default(), ImmediateLoader)
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("config", &self.config)
            .field("defined", &self.registry.len())
            .finish()
    }
}
