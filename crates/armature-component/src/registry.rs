//! Name-to-variant registry.

use crate::{Component, ComponentConfig};
use std::collections::HashMap;
use std::sync::Arc;

/// Constructs a component variant from a configuration.
///
/// Blanket-implemented for plain closures, so registration usually looks
/// like:
///
/// ```
/// use armature_component::{Component, ComponentConfig, ComponentCore, Registry};
/// use async_trait::async_trait;
///
/// struct Banner { core: ComponentCore }
///
/// #[async_trait]
/// impl Component for Banner {
///     fn core(&self) -> &ComponentCore { &self.core }
///     fn core_mut(&mut self) -> &mut ComponentCore { &mut self.core }
/// }
///
/// let mut registry = Registry::new();
/// registry.register("Banner", |config: ComponentConfig| {
///     Box::new(Banner { core: ComponentCore::new(config) }) as Box<dyn Component>
/// });
/// assert!(registry.lookup("Banner").is_some());
/// ```
pub trait ComponentFactory: Send + Sync {
    /// Creates an instance. Only lifecycle step 1 (field assignment)
    /// belongs here; `mount` drives the remaining construction steps.
    fn create(&self, config: ComponentConfig) -> Box<dyn Component>;
}

impl<F> ComponentFactory for F
where
    F: Fn(ComponentConfig) -> Box<dyn Component> + Send + Sync,
{
    fn create(&self, config: ComponentConfig) -> Box<dyn Component> {
        self(config)
    }
}

/// Name-to-factory mapping used to resolve a descriptor's name to a
/// constructible behavior object.
///
/// Registration is insert-or-overwrite (last write wins on a name
/// collision) and there is no removal operation. Registrations are
/// expected once at process start, before orchestration runs, but nothing
/// enforces that ordering - a late registration simply affects subsequent
/// orchestration calls only.
///
/// `Clone` is cheap (factories are `Arc`s); the process-wide facade clones
/// a snapshot per orchestration call.
#[derive(Clone, Default)]
pub struct Registry {
    factories: HashMap<String, Arc<dyn ComponentFactory>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`, overwriting any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: impl ComponentFactory + 'static) {
        self.register_arc(name, Arc::new(factory));
    }

    /// Registers an already-shared factory under `name`.
    pub fn register_arc(&mut self, name: impl Into<String>, factory: Arc<dyn ComponentFactory>) {
        self.factories.insert(name.into(), factory);
    }

    /// Exact, case-sensitive lookup. Returns `None` when absent.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ComponentFactory>> {
        self.factories.get(name).cloned()
    }

    /// True when `name` has a registration.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("Registry").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentCore;
    use async_trait::async_trait;

    struct Tagged {
        core: ComponentCore,
    }

    #[async_trait]
    impl Component for Tagged {
        fn core(&self) -> &ComponentCore {
            &self.core
        }
        fn core_mut(&mut self) -> &mut ComponentCore {
            &mut self.core
        }
    }

    /// Factory whose instances carry `tag` in their data, so tests can
    /// tell which registration produced an instance.
    fn tagged(tag: &'static str) -> impl Fn(ComponentConfig) -> Box<dyn Component> + Send + Sync {
        move |config| {
            let mut core = ComponentCore::new(config);
            core.data = serde_json::json!({ "tag": tag });
            Box::new(Tagged { core }) as Box<dyn Component>
        }
    }

    fn build(registry: &Registry, name: &str) -> Box<dyn Component> {
        let mut doc = armature_dom::Document::new();
        let element = doc.element("div", doc.root());
        registry
            .lookup(name)
            .unwrap()
            .create(ComponentConfig::new(name, element))
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = Registry::new();
        registry.register("Foo", tagged("foo"));
        assert!(registry.lookup("Foo").is_some());
        assert!(registry.lookup("foo").is_none());
        assert!(registry.lookup("Bar").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.register("Accordion", tagged("a"));
        assert!(registry.contains("Accordion"));
        assert!(!registry.contains("accordion"));
        assert!(!registry.contains("ACCORDION"));
    }

    #[test]
    fn last_write_wins_on_collision() {
        let mut registry = Registry::new();
        registry.register("Foo", tagged("first"));
        registry.register("Foo", tagged("second"));
        assert_eq!(registry.len(), 1);

        let instance = build(&registry, "Foo");
        assert_eq!(instance.core().data["tag"], "second");
    }

    #[test]
    fn clone_snapshots_current_entries() {
        let mut registry = Registry::new();
        registry.register("Early", tagged("e"));
        let snapshot = registry.clone();
        registry.register("Late", tagged("l"));

        assert!(snapshot.contains("Early"));
        assert!(!snapshot.contains("Late"));
        assert!(registry.contains("Late"));
    }

    #[test]
    fn debug_lists_sorted_names() {
        let mut registry = Registry::new();
        registry.register("B", tagged("b"));
        registry.register("A", tagged("a"));
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("\"A\""));
        assert!(rendered.contains("\"B\""));
    }
}
