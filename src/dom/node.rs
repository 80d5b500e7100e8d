//! Node types: NodeId, NodeKind, NodeData.

use std::collections::BTreeMap;

use slotmap::new_key_type;

use crate::geometry::{Size, TextDirection};

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Kind of a document node.
///
/// Widgets can only be attached to element nodes; text nodes exist so that
/// hosts can represent mixed content and so attach can reject non-elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A regular element with tag, attributes, classes and styles.
    Element,
    /// A text node; only `content` is meaningful.
    Text,
}

/// Data associated with a single document node.
///
/// Attributes, classes, inline styles, text content and document focus are
/// the widget's entire output surface; the measured [`Size`] is input the
/// host provides and the widget never modifies.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Node kind (element or text).
    pub kind: NodeKind,
    /// Element tag name (e.g. "nav", "button", "a").
    pub tag: String,
    /// Class list, in insertion order.
    pub classes: Vec<String>,
    /// Attribute map (sorted for deterministic rendering).
    attributes: BTreeMap<String, String>,
    /// Inline style map (sorted for deterministic rendering).
    styles: BTreeMap<String, String>,
    /// Text content (labels, text nodes).
    pub content: Option<String>,
    /// Box size as measured by the host.
    pub measured: Size,
    /// Writing direction; meaningful on widget roots.
    pub direction: TextDirection,
    /// Whether this node can receive document focus.
    pub focusable: bool,
    /// Whether this node is rendered.
    pub visible: bool,
}

impl NodeData {
    /// Create an element node with the given tag and sensible defaults.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.into(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            content: None,
            measured: Size::ZERO,
            direction: TextDirection::Ltr,
            focusable: false,
            visible: true,
        }
    }

    /// Create a text node with the given content.
    pub fn text(content: impl Into<String>) -> Self {
        let mut data = Self::new("#text");
        data.kind = NodeKind::Text;
        data.content = Some(content.into());
        data
    }

    /// Whether this node is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    // ── Builders ─────────────────────────────────────────────────────

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the measured size (builder).
    pub fn with_measured(mut self, width: u32, height: u32) -> Self {
        self.measured = Size::new(width, height);
        self
    }

    /// Set the writing direction (builder).
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the text content (builder).
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set whether this node can receive focus (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    // ── Classes ──────────────────────────────────────────────────────

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // ── Attributes ───────────────────────────────────────────────────

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the attribute is present, regardless of value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_owned(), value.into());
    }

    /// Remove an attribute. No-op if not present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Iterate attributes in sorted order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // ── Inline styles ────────────────────────────────────────────────

    /// Get an inline style value.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Set an inline style value.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.styles.insert(property.to_owned(), value.into());
    }

    /// Clear an inline style. No-op if not present.
    pub fn clear_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    /// Iterate inline styles in sorted order.
    pub fn style_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
