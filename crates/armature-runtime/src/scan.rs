//! Reference-map builder.
//!
//! A pure scan of a document scope that ties every marked reference to its
//! nearest enclosing component root and records nested component
//! dependencies. No instantiation happens here; the output feeds the
//! engine, or callers that want the map alone.
//!
//! # Markup Convention
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | `data-component="Name"` | component root, value = registered name |
//! | `data-ref="Name:local"` | reference, owned by the nearest component root |
//!
//! # Algorithm
//!
//! Two passes over the scope, both in document order:
//!
//! 1. For every reference-marked element: walk upward (self-inclusive) to
//!    the nearest component-marked ancestor. No ancestor, an unnamed
//!    reference, or an unnamed ancestor all skip the element silently.
//!    Get-or-create the descriptor keyed by the ancestor element; on first
//!    creation, scan the ancestor's entire subtree and append a dependency
//!    for every differently-named component marker (every occurrence, no
//!    deduplication). Append the reference.
//! 2. Every component-marked element in scope that got no descriptor in
//!    pass 1 receives an empty one.
//!
//! Resulting order: pass-1 descriptors by first-reference discovery, then
//! pass-2 descriptors in document order. The ancestor walk is unbounded -
//! a reference inside the scope may attach to a component root above it.

use armature_component::{Reference, SharedComponent};
use armature_dom::{Document, NodeId};
use tracing::trace;

/// Component-root marker attribute.
pub const COMPONENT_ATTR: &str = "data-component";

/// Reference marker attribute.
pub const REF_ATTR: &str = "data-ref";

/// A nested component found inside another component's subtree.
///
/// Recorded, not resolved: nothing orders instantiation by dependencies,
/// and the same nested name at multiple depths produces multiple entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// The nested component's declared name.
    pub name: String,
    /// The nested component's root element.
    pub root_element: NodeId,
}

/// Scan-time record tying a component root to its references and
/// dependencies.
///
/// Identity is `root_element`: two elements sharing a component name are
/// two distinct descriptors, and one scan never produces two descriptors
/// for the same element.
#[derive(Clone)]
pub struct ComponentDescriptor {
    /// Declared component name.
    pub name: String,
    /// The marked root element.
    pub root_element: NodeId,
    /// References attached to this root, in discovery order.
    pub refs: Vec<Reference>,
    /// Nested components in this root's subtree, in document order.
    pub dependencies: Vec<Dependency>,
    /// The live instance, populated by the engine when the registry has a
    /// matching factory. Never cleared by the destroy operation.
    pub instance: Option<SharedComponent>,
}

impl ComponentDescriptor {
    fn empty(name: impl Into<String>, root_element: NodeId) -> Self {
        Self {
            name: name.into(),
            root_element,
            refs: Vec::new(),
            dependencies: Vec::new(),
            instance: None,
        }
    }
}

impl std::fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("root_element", &self.root_element)
            .field("refs", &self.refs)
            .field("dependencies", &self.dependencies)
            .field("instance", &self.instance.as_ref().map(|_| ".."))
            .finish()
    }
}

/// An ordered sequence of descriptors, built fresh per scan.
pub type ComponentsMap = Vec<ComponentDescriptor>;

/// Returns the marker value when present and non-empty.
///
/// Unnamed markers (absent attribute or empty string) are invisible to
/// the scan: they neither create descriptors nor contribute dependencies.
fn marker<'a>(doc: &'a Document, node: NodeId, attr: &str) -> Option<&'a str> {
    doc.attribute(node, attr).filter(|value| !value.is_empty())
}

/// Builds the map of component descriptors for `scope`.
///
/// `None` scans the whole document. The scan is fully synchronous and has
/// no failure mode: structural mismatches are skipped silently.
///
/// # Example
///
/// ```
/// use armature_dom::Document;
/// use armature_runtime::build_component_reference_map;
///
/// let mut doc = Document::new();
/// let root = doc.element("div", doc.root());
/// doc.set_attribute(root, "data-component", "Root");
/// let button = doc.element("div", root);
/// doc.set_attribute(button, "data-ref", "Root:button");
/// let nested = doc.element("div", root);
/// doc.set_attribute(nested, "data-component", "Nested");
///
/// let map = build_component_reference_map(&doc, None);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map[0].name, "Root");
/// assert_eq!(map[0].refs[0].name, "Root:button");
/// assert_eq!(map[0].dependencies[0].name, "Nested");
/// assert_eq!(map[1].name, "Nested");
/// assert!(map[1].refs.is_empty());
/// ```
#[must_use]
pub fn build_component_reference_map(doc: &Document, scope: Option<NodeId>) -> ComponentsMap {
    let scope = scope.unwrap_or_else(|| doc.root());
    let mut map = ComponentsMap::new();

    // Pass 1: references, with descriptors created on first attachment.
    for ref_element in doc.descendants(scope) {
        if doc.attribute(ref_element, REF_ATTR).is_none() {
            continue;
        }
        let Some(anchor) = doc.closest(ref_element, |d, n| d.attribute(n, COMPONENT_ATTR).is_some())
        else {
            trace!(element = ?ref_element, "reference has no enclosing component, skipped");
            continue;
        };
        let Some(ref_name) = marker(doc, ref_element, REF_ATTR) else {
            trace!(element = ?ref_element, "unnamed reference, skipped");
            continue;
        };
        let Some(component_name) = marker(doc, anchor, COMPONENT_ATTR) else {
            trace!(element = ?anchor, "unnamed component root, reference skipped");
            continue;
        };

        let index = match map.iter().position(|d| d.root_element == anchor) {
            Some(index) => index,
            None => {
                let mut descriptor = ComponentDescriptor::empty(component_name, anchor);
                for nested in doc.descendants(anchor) {
                    if let Some(nested_name) = marker(doc, nested, COMPONENT_ATTR) {
                        if nested_name != component_name {
                            descriptor.dependencies.push(Dependency {
                                name: nested_name.to_string(),
                                root_element: nested,
                            });
                        }
                    }
                }
                map.push(descriptor);
                map.len() - 1
            }
        };
        map[index].refs.push(Reference::new(ref_name, ref_element));
    }

    // Pass 2: components with no references anywhere inside them.
    for element in doc.descendants(scope) {
        let Some(name) = marker(doc, element, COMPONENT_ATTR) else {
            continue;
        };
        if !map.iter().any(|d| d.root_element == element) {
            map.push(ComponentDescriptor::empty(name, element));
        }
    }

    map
}
