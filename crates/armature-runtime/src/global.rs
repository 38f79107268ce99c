//! Process-wide default registry and engine.
//!
//! The primary API is the explicit [`Registry`] + [`Engine`] pair; this
//! module is the thin singleton wrapper for callers that genuinely want a
//! process-wide default - typically page-style deployments where one
//! document and one component set exist per process.
//!
//! # Shared-State Semantics
//!
//! - The registry is append/overwrite-only. Each orchestration call
//!   snapshots it at call start, so a late registration affects
//!   subsequent calls only.
//! - The engine (current map + bindings) sits behind an async mutex, so
//!   concurrent orchestration calls serialize instead of racing the
//!   current-map pointer. [`get_instance`] waits for an in-flight batch
//!   for the same reason.
//!
//! Test suites generally want the explicit objects instead; everything
//! here ends up in one process-wide map.

use crate::engine::{Engine, InitOptions};
use crate::scan::ComponentsMap;
use armature_component::{ComponentError, ComponentFactory, Registry, SharedComponent};
use armature_dom::{Document, NodeId};
use parking_lot::RwLock;
use std::sync::OnceLock;
use tokio::sync::Mutex;

static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();
static ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();

fn registry() -> &'static RwLock<Registry> {
    REGISTRY.get_or_init(|| RwLock::new(Registry::new()))
}

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| Mutex::new(Engine::new()))
}

/// Registers a component variant under `name` in the process-wide
/// registry, overwriting any previous registration for that name.
pub fn register_component(name: impl Into<String>, factory: impl ComponentFactory + 'static) {
    registry().write().register(name, factory);
}

/// Alias for [`register_component`].
pub fn define_component(name: impl Into<String>, factory: impl ComponentFactory + 'static) {
    register_component(name, factory);
}

/// Runs one orchestration batch against the process-wide engine.
///
/// Returns a clone of the stored map (descriptors clone cheaply; the
/// instances inside are shared handles). On `Err` the partially
/// instantiated map is stored all the same, exactly as with an explicit
/// [`Engine`].
pub async fn init_components(
    doc: &Document,
    options: &InitOptions,
) -> Result<ComponentsMap, ComponentError> {
    let snapshot = registry().read().clone();
    let mut engine = engine().lock().await;
    engine
        .init_components(doc, &snapshot, options)
        .await
        .map(Clone::clone)
}

/// Returns the live instance for `element` from the process-wide
/// engine's current map.
pub async fn get_instance(element: NodeId) -> Option<SharedComponent> {
    engine().lock().await.get_instance(element)
}

/// The destroy operation against the process-wide engine: clears the
/// element's back-reference and nothing else.
pub async fn destroy(element: NodeId) -> Option<SharedComponent> {
    engine().lock().await.destroy(element)
}
