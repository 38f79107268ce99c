//! Element handles and per-node storage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque handle to an element inside a [`Document`](crate::Document).
///
/// Handles are indices into the owning document's arena. They are `Copy`
/// and compare by value, which makes them usable as map keys wherever the
/// system needs element identity (descriptor keys, back-reference tables).
///
/// A `NodeId` is only valid for the document that created it; nothing
/// checks cross-document use, the lookups simply return unrelated nodes.
///
/// # Example
///
/// ```
/// use armature_dom::Document;
///
/// let mut doc = Document::new();
/// let a = doc.element("div", doc.root());
/// let b = doc.element("div", doc.root());
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Storage for a single element.
///
/// Attributes are kept sorted for deterministic iteration in debug output.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) tag: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attributes: BTreeMap<String, String>,
}

impl NodeData {
    pub(crate) fn new(tag: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.into(),
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }
}
