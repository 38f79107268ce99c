//! Named element references.

use armature_dom::NodeId;
use serde::{Deserialize, Serialize};

/// One marked child node inside a component's region.
///
/// The name is whatever string the markup author assigned. To be
/// retrievable through [`ComponentCore::get`](crate::ComponentCore::get)
/// or [`get_all`](crate::ComponentCore::get_all) it must follow the
/// `"{OwningComponentName}:{localName}"` convention, but nothing validates
/// that at scan time - a non-conforming name simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Author-assigned reference name.
    pub name: String,
    /// The marked element.
    pub element: NodeId,
}

impl Reference {
    /// Creates a reference.
    #[must_use]
    pub fn new(name: impl Into<String>, element: NodeId) -> Self {
        Self {
            name: name.into(),
            element,
        }
    }
}
