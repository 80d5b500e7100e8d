//! Per-item state: visibility and expansion axes.

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Where an item sits relative to the visible overflow window.
///
/// Independent of the expansion axis: an item can be expanded while scrolled
/// out of view (though opening one that is out of view is refused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Fully inside the visible window (or no overflow at all).
    #[default]
    Visible,
    /// Scrolled past the leading edge.
    OverflowedStart,
    /// Beyond the overflow boundary at the trailing edge.
    OverflowedEnd,
}

// ---------------------------------------------------------------------------
// MenuItem
// ---------------------------------------------------------------------------

/// A first-level menu entry and its scanned parts.
///
/// Owned exclusively by the [`Menu`](super::Menu); items refer back to their
/// owner by index, never by pointer.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Position in document order.
    pub index: usize,
    /// The item element.
    pub node: NodeId,
    /// The item's link element. Required by the markup contract.
    pub link: NodeId,
    /// The caret toggle button, when the item discloses a sub-panel.
    pub caret: Option<NodeId>,
    /// The mega panel, when present.
    pub mega: Option<NodeId>,
    /// Sub-item links in document order (one per sub-item).
    pub sub_links: Vec<NodeId>,
    /// Whether the markup marks this item as owning children.
    pub has_children: bool,
    /// Effective width after line-clamp measurement.
    pub width: u32,
    /// Position relative to the overflow window.
    pub visibility: Visibility,
    /// Whether the item's disclosure is expanded.
    pub expanded: bool,
}

impl MenuItem {
    /// Whether the item is fully inside the visible window.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}
