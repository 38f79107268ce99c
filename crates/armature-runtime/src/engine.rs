//! Orchestration engine and instance lookup.
//!
//! The [`Engine`] owns the "last scan result" and the back-reference
//! table, both explicit objects rather than process globals; the registry
//! is passed by reference per call. A thin process-wide facade exists in
//! [`global`](crate::global) for callers that want one.
//!
//! # Orchestration Batch
//!
//! ```text
//! init_components(doc, registry, options)
//!     resolve scope      'page' / unresolvable selector -> whole document
//!     scan               build_component_reference_map (synchronous)
//!     store map          wholesale replacement, before any instantiation
//!     for each descriptor in map order:
//!         registry miss  -> instance stays unset, continue
//!         registry hit   -> mount (sync construction contract)
//!                           await init()      <- only suspension points
//!     return the map
//! ```
//!
//! Initialization is strictly sequential: instance N+1 is not constructed
//! until instance N's `init` completed. An `Err` from `init` propagates
//! immediately and leaves later descriptors un-instantiated; earlier
//! instances stay exactly as initialized. There is no cancellation or
//! timeout - a hanging `init` blocks the batch.

use crate::scan::{build_component_reference_map, ComponentsMap};
use armature_component::{mount, Bindings, ComponentConfig, ComponentError, Registry, SharedComponent};
use armature_dom::{Document, NodeId, Selector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

/// Where an orchestration batch scans.
///
/// Serializes as a bare string: the literal `"page"` means the whole
/// document, anything else is a selector resolved to its first match
/// (falling back to the whole document when it matches nothing or is not
/// parseable).
///
/// # Example
///
/// ```
/// use armature_runtime::Scope;
///
/// let page: Scope = serde_json::from_str("\"page\"").unwrap();
/// assert_eq!(page, Scope::Page);
/// let hero: Scope = serde_json::from_str("\"#hero\"").unwrap();
/// assert_eq!(hero, Scope::Selector("#hero".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Scope {
    /// The whole document.
    Page,
    /// First element matching the selector.
    Selector(String),
}

impl Default for Scope {
    fn default() -> Self {
        Scope::Page
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> String {
        match scope {
            Scope::Page => "page".to_string(),
            Scope::Selector(selector) => selector,
        }
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Scope {
        if value == "page" {
            Scope::Page
        } else {
            Scope::Selector(value)
        }
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Scope {
        Scope::from(value.to_string())
    }
}

/// Options for one orchestration batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitOptions {
    /// Scope to scan; defaults to the whole document.
    pub scope: Scope,
}

impl InitOptions {
    /// Whole-document options, the default.
    #[must_use]
    pub fn page() -> Self {
        Self::default()
    }

    /// Options scoped to the first match of `selector`.
    #[must_use]
    pub fn scoped(selector: impl Into<String>) -> Self {
        Self {
            scope: Scope::Selector(selector.into()),
        }
    }
}

/// Orchestrator: turns scan descriptors into live, initialized instances
/// and answers instance lookups against the most recent map.
///
/// The current map is replaced wholesale (never merged) by each
/// [`init_components`](Self::init_components) call. Concurrent batches
/// against one engine are impossible by construction (`&mut self`);
/// callers sharing an engine serialize through whatever lock wraps it.
///
/// # Example
///
/// ```
/// use armature_component::{Component, ComponentConfig, ComponentCore, Registry};
/// use armature_dom::Document;
/// use armature_runtime::{Engine, InitOptions};
/// use async_trait::async_trait;
///
/// struct Counter { core: ComponentCore }
///
/// #[async_trait]
/// impl Component for Counter {
///     fn core(&self) -> &ComponentCore { &self.core }
///     fn core_mut(&mut self) -> &mut ComponentCore { &mut self.core }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut doc = Document::new();
/// let root = doc.element("div", doc.root());
/// doc.set_attribute(root, "data-component", "Counter");
///
/// let mut registry = Registry::new();
/// registry.register("Counter", |config: ComponentConfig| {
///     Box::new(Counter { core: ComponentCore::new(config) }) as Box<dyn Component>
/// });
///
/// let mut engine = Engine::new();
/// let map = engine
///     .init_components(&doc, &registry, &InitOptions::page())
///     .await
///     .unwrap();
/// assert!(map[0].instance.is_some());
/// assert!(engine.get_instance(root).is_some());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    map: ComponentsMap,
    bindings: Bindings,
}

impl Engine {
    /// Creates an engine with an empty current map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a scope option to the element an orchestration batch
    /// scans. `'page'`, an unparseable selector, and a selector with no
    /// match all resolve to the whole document.
    #[must_use]
    pub fn resolve_scope(doc: &Document, scope: &Scope) -> NodeId {
        match scope {
            Scope::Page => doc.root(),
            Scope::Selector(selector) => Selector::parse(selector)
                .and_then(|parsed| doc.select_first(&parsed))
                .unwrap_or_else(|| {
                    trace!(selector = %selector, "scope selector unresolvable, using whole document");
                    doc.root()
                }),
        }
    }

    /// Runs one orchestration batch and returns the stored map.
    ///
    /// See the module docs for the step sequence and failure policy. On
    /// `Err`, the freshly scanned map is already stored; descriptors
    /// after the failing one have `instance` unset.
    pub async fn init_components(
        &mut self,
        doc: &Document,
        registry: &Registry,
        options: &InitOptions,
    ) -> Result<&ComponentsMap, ComponentError> {
        let scope = Self::resolve_scope(doc, &options.scope);
        self.map = build_component_reference_map(doc, Some(scope));
        debug!(descriptors = self.map.len(), "scan complete");

        for index in 0..self.map.len() {
            let (name, root_element, refs) = {
                let descriptor = &self.map[index];
                (
                    descriptor.name.clone(),
                    descriptor.root_element,
                    descriptor.refs.clone(),
                )
            };
            let Some(factory) = registry.lookup(&name) else {
                trace!(component = %name, "no registered factory, descriptor left bare");
                continue;
            };

            let config = ComponentConfig::new(name.clone(), root_element).with_references(refs);
            let shared = mount(factory.as_ref(), config, &mut self.bindings);
            self.map[index].instance = Some(Arc::clone(&shared));

            let mut instance = shared.lock().await;
            instance.init().await?;
            debug!(component = %name, "component initialized");
        }

        Ok(&self.map)
    }

    /// Returns the live instance for `element` from the current map.
    ///
    /// Reflects only the most recent batch: elements from a superseded
    /// map are not found, even when their instances are still alive.
    #[must_use]
    pub fn get_instance(&self, element: NodeId) -> Option<SharedComponent> {
        self.map
            .iter()
            .find(|descriptor| descriptor.root_element == element)
            .and_then(|descriptor| descriptor.instance.clone())
    }

    /// The most recently stored map.
    #[must_use]
    pub fn current_map(&self) -> &ComponentsMap {
        &self.map
    }

    /// The back-reference table.
    #[must_use]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// The destroy operation: clears `element`'s back-reference and
    /// nothing else. The descriptor's `instance` field, caches, and
    /// listeners all stay as they are.
    pub fn destroy(&mut self, element: NodeId) -> Option<SharedComponent> {
        self.bindings.detach(element)
    }
}
