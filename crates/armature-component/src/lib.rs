//! Component contract layer for armature.
//!
//! This crate defines what a component IS: the lifecycle every behavior
//! object satisfies, the reference list it can query, the back-reference
//! table that ties live instances to their elements, and the registry that
//! resolves a marked name to a constructible variant.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  armature-dom       : Document, NodeId, Selector            │
//! │  armature-component : lifecycle contract, registry ◄── HERE │
//! │  armature-runtime   : scan, engine, lookup, integrations    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! Construction is synchronous and runs a fixed contract; completion is a
//! separate, explicitly awaited asynchronous step:
//!
//! ```text
//! mount(factory, config, bindings)
//!     1. factory.create(config)   fields assigned from config
//!     2. build_cache()            derive cached state from refs
//!     3. bind_events()            attach listeners
//!     4. bindings.attach(..)      element -> instance back-reference
//! instance.init().await          one-time async setup (caller-driven)
//! ```
//!
//! `init` is never called by construction. Whoever creates an instance —
//! the runtime engine, or a test driving a component directly — must await
//! it before treating the instance as ready.
//!
//! # Defining a Variant
//!
//! ```
//! use armature_component::{Component, ComponentConfig, ComponentCore, ComponentError};
//! use async_trait::async_trait;
//!
//! struct Accordion {
//!     core: ComponentCore,
//!     open: bool,
//! }
//!
//! impl Accordion {
//!     fn factory(config: ComponentConfig) -> Box<dyn Component> {
//!         Box::new(Accordion { core: ComponentCore::new(config), open: false })
//!     }
//! }
//!
//! #[async_trait]
//! impl Component for Accordion {
//!     fn core(&self) -> &ComponentCore { &self.core }
//!     fn core_mut(&mut self) -> &mut ComponentCore { &mut self.core }
//!
//!     async fn init(&mut self) -> Result<(), ComponentError> {
//!         self.open = false;
//!         Ok(())
//!     }
//! }
//! # let _ = Accordion::factory;
//! ```

mod bindings;
mod component;
mod error;
mod reference;
mod registry;

pub use bindings::Bindings;
pub use component::{mount, Component, ComponentConfig, ComponentCore, SharedComponent};
pub use error::ComponentError;
pub use reference::Reference;
pub use registry::{ComponentFactory, Registry};
