//! Host-document model: arena tree, node data, scoped queries.
//!
//! The [`Dom`] stands in for the browser document in this headless crate.
//! The host builds the tree with role data-attributes and measured sizes;
//! widgets scan it at attach time and mutate attributes, classes, inline
//! styles, text and focus — nothing else. Those mutations are the public
//! output contract.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId, NodeKind};
pub use tree::{DeviceClass, Dom};
