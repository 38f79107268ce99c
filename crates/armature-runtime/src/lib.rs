//! Runtime layer for armature: scan, orchestration, lookup, and the
//! deployment adapters.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  armature-dom       : Document, NodeId, Selector            │
//! │  armature-component : lifecycle contract, registry          │
//! │  armature-runtime   : scan, engine, lookup       ◄── HERE   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! ```text
//! caller ──► Engine::init_components(scope)
//!               │ resolve scope ('page' or selector, silent fallback)
//!               ▼
//!            build_component_reference_map     pure, synchronous scan
//!               │ descriptors: refs + dependencies
//!               ▼
//!            per descriptor, in map order:
//!               registry lookup ── miss ──► skip (instance unset)
//!               │ hit
//!               ▼
//!            mount (construction contract) ──► await init()
//!               │
//!               ▼
//!            stored as the engine's current map ──► get_instance(element)
//! ```
//!
//! # Entry Points
//!
//! | Operation | Where |
//! |-----------|-------|
//! | `build_component_reference_map` | [`scan`] (also re-exported here) |
//! | `Engine::init_components` / `get_instance` | [`engine`] |
//! | process-wide `register_component` / `define_component` / `init_components` / `get_instance` | [`global`] |
//! | deployment adapters | [`integrations`] |
//!
//! # Example
//!
//! ```
//! use armature_component::{Component, ComponentConfig, ComponentCore, Registry};
//! use armature_dom::Document;
//! use armature_runtime::{Engine, InitOptions};
//! use async_trait::async_trait;
//!
//! struct Toggle { core: ComponentCore }
//!
//! #[async_trait]
//! impl Component for Toggle {
//!     fn core(&self) -> &ComponentCore { &self.core }
//!     fn core_mut(&mut self) -> &mut ComponentCore { &mut self.core }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut doc = Document::new();
//! let root = doc.element("div", doc.root());
//! doc.set_attribute(root, "data-component", "Toggle");
//!
//! let mut registry = Registry::new();
//! registry.register("Toggle", |config: ComponentConfig| {
//!     Box::new(Toggle { core: ComponentCore::new(config) }) as Box<dyn Component>
//! });
//!
//! let mut engine = Engine::new();
//! engine.init_components(&doc, &registry, &InitOptions::page()).await.unwrap();
//! assert!(engine.get_instance(root).is_some());
//! # });
//! ```

pub mod engine;
pub mod global;
pub mod integrations;
pub mod scan;

pub use engine::{Engine, InitOptions, Scope};
pub use scan::{
    build_component_reference_map, ComponentDescriptor, ComponentsMap, Dependency, COMPONENT_ATTR,
    REF_ATTR,
};

// The contract layer, re-exported so runtime consumers need one import.
pub use armature_component::{
    mount, Bindings, Component, ComponentConfig, ComponentCore, ComponentError, ComponentFactory,
    Reference, Registry, SharedComponent,
};
pub use armature_dom::{Document, NodeId, Selector};
