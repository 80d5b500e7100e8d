//! The host-document tree: arena storage, traversal, mutation surface.
//!
//! [`Dom`] stands in for the browser document. The host builds it, measures
//! it, and keeps its viewport metadata current; widgets read structure and
//! geometry from it and write attributes, classes, inline styles, text and
//! focus back. Those writes are the widgets' entire output.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use crate::geometry::TextDirection;

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

// ---------------------------------------------------------------------------
// DeviceClass
// ---------------------------------------------------------------------------

/// Host device classification, supplied by the environment.
///
/// Display-mode detection is not purely width-driven: a tablet forces the
/// mobile rendering regardless of viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    /// Phone-class device.
    Phone,
    /// Tablet-class device.
    Tablet,
    /// Desktop-class device.
    #[default]
    Desktop,
}

// ---------------------------------------------------------------------------
// Dom
// ---------------------------------------------------------------------------

/// The central document tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps so that node removal is O(subtree size) and
/// lookup is O(1). The tree also owns the pieces of host state widgets
/// depend on: document focus, viewport width, and device class.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
    focused: Option<NodeId>,
    viewport_width: u32,
    device: DeviceClass,
}

impl Dom {
    /// Create an empty document with a desktop-sized viewport.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            focused: None,
            viewport_width: 1280,
            device: DeviceClass::Desktop,
        }
    }

    // ── Structure ────────────────────────────────────────────────────

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the document root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(id);
        id
    }

    /// Remove a node and all its descendants recursively.
    ///
    /// Clears document focus if the focused node is inside the removed
    /// subtree. Returns the `NodeData` for the removed node, or `None` if it
    /// didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    to_remove.push_back(child);
                }
            }
            self.parent.remove(current);
            if self.focused == Some(current) {
                self.focused = None;
            }
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `id` is `ancestor` itself or one of its descendants.
    ///
    /// This is the containment test used for outside-click detection and
    /// listener-target resolution (`element.contains` in a browser).
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        if !self.nodes.contains_key(id) || !self.nodes.contains_key(ancestor) {
            return false;
        }
        if id == ancestor {
            return true;
        }
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            if p == ancestor {
                return true;
            }
            current = p;
        }
        false
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The document root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the document contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    ///
    /// This is document order; all scoped queries build on it.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            let kids = self.children(current);
            for &child in kids.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // ── Host environment ─────────────────────────────────────────────

    /// Current viewport width in logical pixels.
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Update the viewport width (the host calls this before dispatching a
    /// resize event).
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// The host device class.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Set the host device class.
    pub fn set_device(&mut self, device: DeviceClass) {
        self.device = device;
    }

    // ── Document focus ───────────────────────────────────────────────

    /// The node that currently owns document focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move document focus to `id`. No-op if the node is missing or not
    /// focusable.
    pub fn focus(&mut self, id: NodeId) {
        if self.nodes.get(id).is_some_and(|d| d.focusable && d.visible) {
            self.focused = Some(id);
        }
    }

    /// Remove document focus from `id` if it owns it.
    pub fn blur(&mut self, id: NodeId) {
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    // ── Node mutation surface ────────────────────────────────────────
    //
    // Missing nodes are silent no-ops, mirroring null-safe DOM access; the
    // widget code stays free of unwraps on optional parts.

    /// Get an attribute value on a node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|d| d.attr(name))
    }

    /// Whether a node carries an attribute, regardless of value.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.nodes.get(id).is_some_and(|d| d.has_attr(name))
    }

    /// Set an attribute on a node.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.set_attr(name, value);
        }
    }

    /// Remove an attribute from a node.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.remove_attr(name);
        }
    }

    /// Whether a node has the given class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes.get(id).is_some_and(|d| d.has_class(class))
    }

    /// Add a class to a node.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.add_class(class);
        }
    }

    /// Remove a class from a node.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.remove_class(class);
        }
    }

    /// Get an inline style value on a node.
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|d| d.style(property))
    }

    /// Set an inline style on a node.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.set_style(property, value);
        }
    }

    /// Clear an inline style on a node.
    pub fn clear_style(&mut self, id: NodeId, property: &str) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.clear_style(property);
        }
    }

    /// Replace a node's text content.
    pub fn set_content(&mut self, id: NodeId, content: impl Into<String>) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.content = Some(content.into());
        }
    }

    /// A node's text content.
    pub fn content(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(|d| d.content.as_deref())
    }

    /// A node's measured width.
    pub fn width(&self, id: NodeId) -> u32 {
        self.nodes.get(id).map_or(0, |d| d.measured.width)
    }

    /// A node's measured height.
    pub fn height(&self, id: NodeId) -> u32 {
        self.nodes.get(id).map_or(0, |d| d.measured.height)
    }

    /// A node's writing direction.
    pub fn direction(&self, id: NodeId) -> TextDirection {
        self.nodes.get(id).map_or(TextDirection::Ltr, |d| d.direction)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
