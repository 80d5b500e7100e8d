//! Focus containment for the mobile flyout.
//!
//! While active, Tab and Shift+Tab cycle document focus through the
//! focusable elements of the widget subtree, wrapping at both ends. The trap
//! engages only when the mobile flyout opens and is force-released on any
//! transition to desktop.

use crate::dom::{Dom, NodeId};

use super::CLASS_TRAP_ACTIVE;

// ---------------------------------------------------------------------------
// FocusTrap
// ---------------------------------------------------------------------------

/// Tab-order containment over a widget subtree.
///
/// Activation and deactivation are idempotent; the active state is mirrored
/// onto the root with the trap class so stylesheets can react.
#[derive(Debug, Default)]
pub struct FocusTrap {
    active: bool,
}

impl FocusTrap {
    /// Create an inactive trap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trap currently contains focus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Engage the trap. No-op if already active.
    pub fn activate(&mut self, dom: &mut Dom, root: NodeId) {
        if !self.active {
            self.active = true;
            dom.add_class(root, CLASS_TRAP_ACTIVE);
        }
    }

    /// Release the trap. No-op if already inactive.
    pub fn deactivate(&mut self, dom: &mut Dom, root: NodeId) {
        if self.active {
            self.active = false;
            dom.remove_class(root, CLASS_TRAP_ACTIVE);
        }
    }

    /// Handle a Tab press while active: move focus to the next (or previous,
    /// for Shift+Tab) focusable element inside `root`, wrapping around.
    ///
    /// Returns the newly focused node, or `None` when the subtree has no
    /// focusable elements.
    pub fn handle_tab(&self, dom: &mut Dom, root: NodeId, backward: bool) -> Option<NodeId> {
        if !self.active {
            return None;
        }

        let focusables = Self::focusable_nodes(dom, root);
        if focusables.is_empty() {
            return None;
        }

        let position = dom
            .focused()
            .and_then(|f| focusables.iter().position(|&n| n == f));

        let next = match (position, backward) {
            // No contained focus yet: enter at the appropriate end.
            (None, false) => 0,
            (None, true) => focusables.len() - 1,
            (Some(idx), false) => (idx + 1) % focusables.len(),
            (Some(0), true) => focusables.len() - 1,
            (Some(idx), true) => idx - 1,
        };

        let target = focusables[next];
        dom.focus(target);
        Some(target)
    }

    /// Collect focusable, visible nodes of the subtree in document order.
    fn focusable_nodes(dom: &Dom, root: NodeId) -> Vec<NodeId> {
        dom.walk_depth_first(root)
            .into_iter()
            .filter(|&id| dom.get(id).is_some_and(|d| d.focusable && d.visible))
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;

    /// Root with three focusable links and one plain span.
    fn build() -> (Dom, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("nav"));
        let a = dom.insert_child(root, NodeData::new("a").focusable(true));
        let _s = dom.insert_child(root, NodeData::new("span"));
        let b = dom.insert_child(root, NodeData::new("a").focusable(true));
        let c = dom.insert_child(root, NodeData::new("button").focusable(true));
        (dom, root, a, b, c)
    }

    #[test]
    fn new_trap_is_inactive() {
        let trap = FocusTrap::new();
        assert!(!trap.is_active());
    }

    #[test]
    fn activate_sets_class() {
        let (mut dom, root, ..) = build();
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);
        assert!(trap.is_active());
        assert!(dom.has_class(root, CLASS_TRAP_ACTIVE));
    }

    #[test]
    fn activate_deactivate_idempotent() {
        let (mut dom, root, ..) = build();
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);
        trap.activate(&mut dom, root);
        assert!(trap.is_active());
        trap.deactivate(&mut dom, root);
        trap.deactivate(&mut dom, root);
        assert!(!trap.is_active());
        assert!(!dom.has_class(root, CLASS_TRAP_ACTIVE));
    }

    #[test]
    fn inactive_trap_ignores_tab() {
        let (mut dom, root, ..) = build();
        let trap = FocusTrap::new();
        assert!(trap.handle_tab(&mut dom, root, false).is_none());
    }

    #[test]
    fn tab_cycles_forward_with_wrap() {
        let (mut dom, root, a, b, c) = build();
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);

        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(a));
        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(b));
        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(c));
        // Last wraps to first.
        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(a));
        assert_eq!(dom.focused(), Some(a));
    }

    #[test]
    fn shift_tab_cycles_backward_with_wrap() {
        let (mut dom, root, a, b, c) = build();
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);

        // No contained focus: enter at the end.
        assert_eq!(trap.handle_tab(&mut dom, root, true), Some(c));
        assert_eq!(trap.handle_tab(&mut dom, root, true), Some(b));
        assert_eq!(trap.handle_tab(&mut dom, root, true), Some(a));
        // First wraps to last.
        assert_eq!(trap.handle_tab(&mut dom, root, true), Some(c));
    }

    #[test]
    fn tab_skips_invisible_nodes() {
        let (mut dom, root, a, b, c) = build();
        dom.get_mut(b).unwrap().visible = false;
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);

        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(a));
        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(c));
    }

    #[test]
    fn tab_with_no_focusables() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("nav"));
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);
        assert!(trap.handle_tab(&mut dom, root, false).is_none());
    }

    #[test]
    fn focus_outside_subtree_enters_at_start() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let outside = dom.insert_child(body, NodeData::new("a").focusable(true));
        let root = dom.insert_child(body, NodeData::new("nav"));
        let first = dom.insert_child(root, NodeData::new("a").focusable(true));
        let _second = dom.insert_child(root, NodeData::new("a").focusable(true));

        dom.focus(outside);
        let mut trap = FocusTrap::new();
        trap.activate(&mut dom, root);
        // Focus held outside the subtree counts as uncontained.
        assert_eq!(trap.handle_tab(&mut dom, root, false), Some(first));
    }
}
