//! Arena-backed document tree.

use crate::node::{NodeData, NodeId};
use crate::selector::Selector;

/// A document tree of elements.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. The document
/// always has a synthetic root node (tag `#document`) that acts as the
/// "whole document" scope; real content hangs beneath it.
///
/// Nodes are never removed. The scan layer builds fresh maps per pass, so
/// stale handles from a mutated tree are a caller concern, not a memory
/// safety concern.
///
/// # Example
///
/// ```
/// use armature_dom::Document;
///
/// let mut doc = Document::new();
/// let section = doc.element("section", doc.root());
/// let button = doc.element("button", section);
///
/// let order: Vec<_> = doc.descendants(doc.root()).collect();
/// assert_eq!(order, vec![section, button]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Creates an empty document containing only the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new("#document", None)],
        }
    }

    /// Returns the synthetic root node.
    ///
    /// Used as the default scope for whole-document scans.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Creates a detached element with the given tag.
    ///
    /// The element has no parent until [`append_child`](Self::append_child)
    /// places it.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData::new(tag, None));
        id
    }

    /// Appends `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    /// Creates an element and appends it to `parent` in one step.
    pub fn element(&mut self, tag: impl Into<String>, parent: NodeId) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.nodes[node.index()]
            .attributes
            .insert(name.into(), value.into());
    }

    /// Returns the attribute value, or `None` when the attribute is absent.
    ///
    /// An attribute set to the empty string is present but empty; callers
    /// that treat empty as missing (the scan layer does) check for that
    /// themselves.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.index()].attributes.get(name).map(String::as_str)
    }

    /// Returns the element's tag.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.index()].tag
    }

    /// Returns the element's parent, `None` for the root or detached nodes.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// Returns the element's children in insertion order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    /// Iterates the subtree beneath `node` in document order (pre-order).
    ///
    /// The start node itself is NOT yielded; this matches the subtree query
    /// semantics the scan layer is written against.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children(node).iter().rev().copied());
        Descendants { doc: self, stack }
    }

    /// Walks upward from `node` (inclusive) to the nearest element for
    /// which `pred` returns true.
    ///
    /// The start node itself IS considered; this matches ancestor-query
    /// semantics where a marked node can satisfy its own query.
    #[must_use]
    pub fn closest<F>(&self, node: NodeId, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(&Document, NodeId) -> bool,
    {
        let mut current = Some(node);
        while let Some(id) = current {
            if pred(self, id) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Returns the first element in document order matching `selector`,
    /// searching the whole document.
    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&node| selector.matches(self, node))
    }

    /// Total number of elements, including the synthetic root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document holds only the synthetic root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Pre-order subtree iterator, see [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(node).iter().rev().copied());
        Some(node)
    }
}
