//! Element-to-instance back-reference table.

use crate::SharedComponent;
use armature_dom::NodeId;
use std::collections::HashMap;

/// Side table mapping an element to its live component instance.
///
/// This is the single back-reference the lifecycle contract maintains:
/// attached as construction step 4, cleared by the destroy operation.
/// Keeping it as a side table (instead of a field on the element) keeps
/// framework state out of the document tree.
///
/// Destroy semantics are deliberately narrow: [`detach`](Self::detach)
/// clears this one entry and nothing else. Caches, listeners, registry
/// entries, and scan maps are untouched; callers needing full teardown
/// compose additional cleanup themselves.
#[derive(Clone, Default)]
pub struct Bindings {
    entries: HashMap<NodeId, SharedComponent>,
}

impl std::fmt::Debug for Bindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut elements: Vec<_> = self.entries.keys().collect();
        elements.sort();
        f.debug_struct("Bindings").field("elements", &elements).finish()
    }
}

impl Bindings {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `element` to `instance`, overwriting any previous binding
    /// for that element.
    pub fn attach(&mut self, element: NodeId, instance: SharedComponent) {
        self.entries.insert(element, instance);
    }

    /// The destroy operation: clears the element's back-reference.
    ///
    /// Returns the detached instance so a caller can compose further
    /// cleanup; the table itself does none.
    pub fn detach(&mut self, element: NodeId) -> Option<SharedComponent> {
        self.entries.remove(&element)
    }

    /// Returns the instance bound to `element`, if any.
    #[must_use]
    pub fn instance(&self, element: NodeId) -> Option<SharedComponent> {
        self.entries.get(&element).cloned()
    }

    /// True when `element` has a live binding.
    #[must_use]
    pub fn contains(&self, element: NodeId) -> bool {
        self.entries.contains_key(&element)
    }

    /// Number of live bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no bindings exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mount, Component, ComponentConfig, ComponentCore};
    use armature_dom::Document;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Stub {
        core: ComponentCore,
    }

    #[async_trait]
    impl Component for Stub {
        fn core(&self) -> &ComponentCore {
            &self.core
        }
        fn core_mut(&mut self) -> &mut ComponentCore {
            &mut self.core
        }
    }

    fn stub_factory(config: ComponentConfig) -> Box<dyn Component> {
        Box::new(Stub {
            core: ComponentCore::new(config),
        })
    }

    #[test]
    fn detach_clears_only_the_binding() {
        let mut doc = Document::new();
        let root = doc.element("div", doc.root());
        let mut bindings = Bindings::new();
        let shared = mount(&stub_factory, ComponentConfig::new("Stub", root), &mut bindings);

        let detached = bindings.detach(root).unwrap();
        assert!(Arc::ptr_eq(&detached, &shared));
        assert!(!bindings.contains(root));

        // The instance itself survives the detach.
        assert_eq!(shared.try_lock().unwrap().name(), "Stub");
    }

    #[test]
    fn detach_missing_is_none() {
        let mut doc = Document::new();
        let loose = doc.element("div", doc.root());
        let mut bindings = Bindings::new();
        assert!(bindings.detach(loose).is_none());
    }

    #[test]
    fn attach_overwrites() {
        let mut doc = Document::new();
        let root = doc.element("div", doc.root());
        let mut bindings = Bindings::new();

        let first = mount(&stub_factory, ComponentConfig::new("Stub", root), &mut bindings);
        let second = mount(&stub_factory, ComponentConfig::new("Stub", root), &mut bindings);
        assert_eq!(bindings.len(), 1);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&bindings.instance(root).unwrap(), &second));
    }
}
