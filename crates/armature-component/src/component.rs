//! Component lifecycle contract.
//!
//! See the crate-level docs for the contract overview. The pieces here:
//!
//! - [`ComponentConfig`]: what a creator supplies (name + element required,
//!   references/options/data default empty).
//! - [`ComponentCore`]: the state every instance carries, with the
//!   reference accessors.
//! - [`Component`]: the capability trait with the three override hooks.
//! - [`mount`]: the construction contract, executed synchronously and in
//!   fixed order.

use crate::{Bindings, ComponentError, Reference};
use armature_dom::NodeId;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared handle to a live component instance.
///
/// The async mutex is deliberate: `init` is awaited while the instance is
/// borrowed mutably, so the guard lives across suspension points.
pub type SharedComponent = Arc<Mutex<Box<dyn Component>>>;

/// Configuration supplied when creating an instance.
///
/// # Example
///
/// ```
/// use armature_component::{ComponentConfig, Reference};
/// use armature_dom::Document;
///
/// let mut doc = Document::new();
/// let root = doc.element("div", doc.root());
/// let button = doc.element("button", root);
///
/// let config = ComponentConfig::new("Card", root)
///     .with_references(vec![Reference::new("Card:button", button)]);
/// assert_eq!(config.name, "Card");
/// assert!(config.options.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ComponentConfig {
    /// Registered component name.
    pub name: String,
    /// The component's root element.
    pub element: NodeId,
    /// References discovered in the component's region.
    pub references: Vec<Reference>,
    /// Free-form options, empty unless the creator supplies them.
    pub options: Map<String, Value>,
    /// Free-form instance data, empty unless the creator supplies it.
    pub data: Value,
}

impl ComponentConfig {
    /// Creates a configuration with empty references, options, and data.
    #[must_use]
    pub fn new(name: impl Into<String>, element: NodeId) -> Self {
        Self {
            name: name.into(),
            element,
            references: Vec::new(),
            options: Map::new(),
            data: Value::Object(Map::new()),
        }
    }

    /// Sets the reference list.
    #[must_use]
    pub fn with_references(mut self, references: Vec<Reference>) -> Self {
        self.references = references;
        self
    }

    /// Sets the options map.
    #[must_use]
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }

    /// Sets the initial data value.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// State carried by every component instance.
///
/// Concrete variants embed a core and expose it through
/// [`Component::core`] / [`Component::core_mut`].
#[derive(Debug, Clone)]
pub struct ComponentCore {
    /// Registered component name.
    pub name: String,
    /// The component's root element.
    pub element: NodeId,
    /// Free-form options.
    pub options: Map<String, Value>,
    /// Free-form data; `init` overrides typically mutate this.
    pub data: Value,
    /// References discovered in the component's region.
    pub refs: Vec<Reference>,
}

impl ComponentCore {
    /// Builds the core from a configuration. This is lifecycle step 1:
    /// plain field assignment, no hooks run here.
    #[must_use]
    pub fn new(config: ComponentConfig) -> Self {
        Self {
            name: config.name,
            element: config.element,
            options: config.options,
            data: config.data,
            refs: config.references,
        }
    }

    /// Returns the first reference whose name equals
    /// `"{self.name}:{name}"`, compared case-INsensitively.
    ///
    /// Note the asymmetry with [`get_all`](Self::get_all), which compares
    /// with exact case. Both behaviors are kept as-is for compatibility;
    /// see the divergence test in this module.
    ///
    /// # Example
    ///
    /// ```
    /// use armature_component::{ComponentConfig, ComponentCore, Reference};
    /// use armature_dom::Document;
    ///
    /// let mut doc = Document::new();
    /// let root = doc.element("div", doc.root());
    /// let button = doc.element("button", root);
    ///
    /// let core = ComponentCore::new(
    ///     ComponentConfig::new("Card", root)
    ///         .with_references(vec![Reference::new("card:Button", button)]),
    /// );
    /// assert_eq!(core.get("button"), Some(button));
    /// assert!(core.get_all("button").is_empty());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeId> {
        let target = format!("{}:{}", self.name, name);
        self.refs
            .iter()
            .find(|reference| reference.name.eq_ignore_ascii_case(&target))
            .map(|reference| reference.element)
    }

    /// Returns every reference whose name equals `"{self.name}:{name}"`,
    /// compared with exact case.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<NodeId> {
        let target = format!("{}:{}", self.name, name);
        self.refs
            .iter()
            .filter(|reference| reference.name == target)
            .map(|reference| reference.element)
            .collect()
    }
}

/// Capability contract every behavior object implements.
///
/// Variants are selected by name through the
/// [`Registry`](crate::Registry); the trait carries the three override
/// hooks plus accessors for the embedded [`ComponentCore`].
///
/// | Hook | When | Default |
/// |------|------|---------|
/// | `build_cache` | construction, step 2 | no-op |
/// | `bind_events` | construction, step 3 | no-op |
/// | `init` | explicitly awaited after construction | `Ok(())` |
///
/// `init` is uniformly asynchronous even when an override completes
/// synchronously, so callers always have exactly one completion contract
/// to await.
#[async_trait]
pub trait Component: Send + Sync {
    /// The instance's state.
    fn core(&self) -> &ComponentCore;

    /// Mutable access to the instance's state.
    fn core_mut(&mut self) -> &mut ComponentCore;

    /// Override point for deriving cached sub-elements or computed state
    /// from the reference list. Runs exactly once, during construction,
    /// before `bind_events`.
    fn build_cache(&mut self) {}

    /// Override point for attaching event listeners. Runs exactly once,
    /// during construction, after `build_cache`.
    fn bind_events(&mut self) {}

    /// One-time asynchronous setup. Never called by construction; the
    /// creator awaits it explicitly. May mutate `core_mut().data`.
    async fn init(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Registered component name.
    fn name(&self) -> &str {
        &self.core().name
    }

    /// The component's root element.
    fn element(&self) -> NodeId {
        self.core().element
    }
}

/// Executes the construction contract and returns the shared instance.
///
/// Synchronous, fixed order:
///
/// 1. `factory.create(config)` — fields assigned from the configuration
/// 2. `build_cache()`
/// 3. `bind_events()`
/// 4. back-reference attached in `bindings` (overwriting any previous
///    binding for that element)
///
/// `init` is NOT called here.
pub fn mount(
    factory: &dyn crate::ComponentFactory,
    config: ComponentConfig,
    bindings: &mut Bindings,
) -> SharedComponent {
    let mut component = factory.create(config);
    component.build_cache();
    component.bind_events();

    let core = component.core();
    debug!(
        component = %core.name,
        element = ?core.element,
        refs = core.refs.len(),
        "component mounted"
    );

    let element = core.element;
    let shared: SharedComponent = Arc::new(Mutex::new(component));
    bindings.attach(element, Arc::clone(&shared));
    shared
}
