//! Document tree model for armature.
//!
//! This crate provides the tree that the rest of the system scans and
//! annotates. It is the foundation layer of the workspace:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  armature-dom       : Document, NodeId, Selector  ◄── HERE  │
//! │  armature-component : lifecycle contract, registry          │
//! │  armature-runtime   : scan, engine, lookup, integrations    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Element Identity
//!
//! Elements are addressed by [`NodeId`], a copyable opaque handle into a
//! [`Document`] arena. Every identity comparison in the system — descriptor
//! keys, back-reference table keys, instance lookup — is `NodeId` equality.
//! Handles are only meaningful for the document that produced them.
//!
//! # Traversal Semantics
//!
//! Two traversal primitives mirror the query semantics of a browser DOM,
//! because the scan layer above depends on them precisely:
//!
//! - [`Document::descendants`] is pre-order (document order) and does NOT
//!   yield the start node itself.
//! - [`Document::closest`] walks upward and DOES consider the start node
//!   itself.
//!
//! # Example
//!
//! ```
//! use armature_dom::Document;
//!
//! let mut doc = Document::new();
//! let card = doc.element("div", doc.root());
//! doc.set_attribute(card, "data-component", "Card");
//! let button = doc.element("button", card);
//! doc.set_attribute(button, "data-ref", "Card:button");
//!
//! assert_eq!(doc.attribute(card, "data-component"), Some("Card"));
//! assert_eq!(doc.parent(button), Some(card));
//! ```

mod document;
mod node;
mod selector;

pub use document::Document;
pub use node::NodeId;
pub use selector::Selector;
