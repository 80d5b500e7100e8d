//! The disclosure state machine: whole-widget flyout and per-item panels.
//!
//! Click, hover and touch all feed the same two state axes. Touch input
//! synthesizes hover events, so a touch on a caret suppresses hover-driven
//! transitions until the follow-up click arrives; that click re-enables
//! them. Closing operations are idempotent throughout.

use crate::dom::{Dom, NodeId};
use crate::error::WidgetError;
use crate::event::input::UiEvent;
use crate::event::notifier::MenuEvent;

use super::widget::Menu;
use super::{
    ATTR_EXPANDED, ATTR_HIDDEN, CLASS_INNER_EXPANDED, CLASS_ITEM_EXPANDED,
};

impl Menu {
    // ── Whole-widget flyout ──────────────────────────────────────────

    /// Open the mobile flyout.
    ///
    /// Fails with [`WidgetError::MissingTarget`] when the markup has no
    /// inner panel; partial opening never happens.
    pub fn open_menu(&mut self, dom: &mut Dom, trigger: UiEvent) -> Result<(), WidgetError> {
        let Some(inner) = self.inner else {
            return Err(WidgetError::missing("inner"));
        };

        dom.set_attr(self.root, ATTR_EXPANDED, "true");
        dom.set_attr(inner, ATTR_HIDDEN, "false");
        self.disable_scroll(dom);
        if let Some(open) = self.open {
            dom.set_attr(open, ATTR_EXPANDED, "true");
        }
        self.is_open = true;
        self.trap.activate(dom, self.root);

        // While open the toggle reads as "close".
        let close_label = dom
            .attr(self.root, &self.config.label_close_attribute)
            .map(str::to_owned);
        if let (Some(label), Some(text)) = (self.toggle_label, close_label) {
            dom.set_content(label, text);
        }

        if let Some(first) = self.items.first().map(|it| it.link) {
            dom.focus(first);
        }

        self.notifier.publish("onOpen", &MenuEvent::from_trigger(trigger));
        Ok(())
    }

    /// Close the mobile flyout and collapse every item.
    pub fn close_menu(
        &mut self,
        dom: &mut Dom,
        trigger: Option<UiEvent>,
    ) -> Result<(), WidgetError> {
        let Some(inner) = self.inner else {
            return Err(WidgetError::missing("inner"));
        };

        dom.set_attr(self.root, ATTR_EXPANDED, "false");
        dom.remove_class(inner, CLASS_INNER_EXPANDED);
        dom.set_attr(inner, ATTR_HIDDEN, "true");
        if let Some(open) = self.open {
            dom.set_attr(open, ATTR_EXPANDED, "false");
        }

        for idx in 0..self.items.len() {
            let node = self.items[idx].node;
            dom.remove_class(node, CLASS_ITEM_EXPANDED);
            dom.set_attr(node, ATTR_EXPANDED, "false");
            self.items[idx].expanded = false;
        }

        let open_label = dom
            .attr(self.root, &self.config.label_open_attribute)
            .map(str::to_owned);
        if let (Some(label), Some(text)) = (self.toggle_label, open_label) {
            dom.set_content(label, text);
        }

        self.enable_scroll(dom);
        self.trap.deactivate(dom, self.root);
        self.is_open = false;

        self.notifier
            .publish("onClose", &MenuEvent { trigger });
        Ok(())
    }

    /// Toggle the flyout from the hamburger button.
    pub fn toggle_menu(&mut self, dom: &mut Dom, trigger: UiEvent) -> Result<(), WidgetError> {
        if self.is_open {
            self.close_menu(dom, Some(trigger))
        } else {
            self.open_menu(dom, trigger)
        }
    }

    /// Back button: return from an expanded item to the first-level list,
    /// restoring focus to the caret that expanded it.
    pub(crate) fn handle_back(&mut self, dom: &mut Dom) {
        if let Some(inner) = self.inner {
            dom.remove_class(inner, CLASS_INNER_EXPANDED);
        }
        for idx in 0..self.items.len() {
            let node = self.items[idx].node;
            dom.remove_class(node, CLASS_ITEM_EXPANDED);
            dom.set_attr(node, ATTR_EXPANDED, "false");
            self.items[idx].expanded = false;
        }
        if let Some(back_idx) = self.back_item {
            if let Some(caret) = self.items.get(back_idx).and_then(|it| it.caret) {
                dom.focus(caret);
            }
        }
    }

    // ── Caret clicks ─────────────────────────────────────────────────

    /// A caret click: item toggle on desktop, single-active-item expansion
    /// inside the mobile flyout.
    pub(crate) fn handle_caret_click(
        &mut self,
        dom: &mut Dom,
        idx: usize,
    ) -> Result<(), WidgetError> {
        if self.root_expanded_is(dom, "false") {
            // Desktop display: toggle just this item. The click also ends
            // any touch-induced hover suppression.
            self.ignore_hover = false;
            if self.items[idx].expanded {
                self.close_item(dom, idx);
            } else {
                self.open_item(dom, idx);
            }
            return Ok(());
        }

        // Mobile display: expand the clicked item full-panel style and
        // collapse the rest, remembering it for back-navigation.
        let Some(inner) = self.inner else {
            return Err(WidgetError::missing("inner"));
        };
        dom.add_class(inner, CLASS_INNER_EXPANDED);

        for i in 0..self.items.len() {
            let node = self.items[i].node;
            if i == idx {
                dom.add_class(node, CLASS_ITEM_EXPANDED);
                dom.set_attr(node, ATTR_EXPANDED, "true");
                self.items[i].expanded = true;
                self.back_item = Some(i);
            } else {
                dom.remove_class(node, CLASS_ITEM_EXPANDED);
                dom.set_attr(node, ATTR_EXPANDED, "false");
                self.items[i].expanded = false;
            }
        }
        self.position_mega_panel(dom, idx);

        if let Some(&first) = self.items[idx].sub_links.first() {
            dom.focus(first);
        }

        // A real click arrived; synthetic hover from touch is over.
        self.ignore_hover = false;
        Ok(())
    }

    // ── Per-item disclosure ──────────────────────────────────────────

    /// Expand an item, collapsing every sibling (single-open invariant on
    /// the first level). Refused for items scrolled out of the overflow
    /// window.
    pub fn open_item(&mut self, dom: &mut Dom, idx: usize) {
        if self.has_overflow && !self.items[idx].is_visible() {
            return;
        }

        for i in 0..self.items.len() {
            let node = self.items[i].node;
            let caret = self.items[i].caret;
            if i == idx {
                dom.set_attr(node, ATTR_EXPANDED, "true");
                if let Some(c) = caret {
                    dom.set_attr(c, ATTR_EXPANDED, "true");
                }
                self.items[i].expanded = true;
            } else {
                dom.set_attr(node, ATTR_EXPANDED, "false");
                if let Some(c) = caret {
                    dom.set_attr(c, ATTR_EXPANDED, "false");
                    dom.blur(c);
                }
                self.items[i].expanded = false;
            }
        }

        self.position_mega_panel(dom, idx);
    }

    /// Collapse an item. Idempotent.
    pub fn close_item(&mut self, dom: &mut Dom, idx: usize) {
        let node = self.items[idx].node;
        dom.set_attr(node, ATTR_EXPANDED, "false");
        if let Some(caret) = self.items[idx].caret {
            dom.set_attr(caret, ATTR_EXPANDED, "false");
        }
        self.items[idx].expanded = false;
    }

    /// Collapse whichever item is currently expanded, if any.
    pub(crate) fn close_open_dropdown(&mut self, dom: &mut Dom) {
        let expanded = self
            .items
            .iter()
            .position(|it| dom.attr(it.node, ATTR_EXPANDED) == Some("true"));
        if let Some(idx) = expanded {
            self.close_item(dom, idx);
        }
    }

    // ── Touch / hover disambiguation ─────────────────────────────────

    /// Touch on a caret: suppress the synthetic hover events touch screens
    /// generate until the next caret click.
    pub(crate) fn handle_touch_on_caret(&mut self) {
        self.ignore_hover = true;
    }

    /// Hover onto an item with children.
    pub(crate) fn handle_hover_on_item(&mut self, dom: &mut Dom, idx: usize) {
        if self.ignore_hover {
            return;
        }
        self.open_item(dom, idx);
    }

    /// Hover off an item with children.
    pub(crate) fn handle_hover_off_item(&mut self, dom: &mut Dom, idx: usize) {
        if self.ignore_hover {
            return;
        }
        self.close_item(dom, idx);
    }

    // ── Document-level click ─────────────────────────────────────────

    /// A click anywhere in the document: close the open flyout when the
    /// target is outside both the inner panel and the toggle button.
    pub(crate) fn handle_click_global(
        &mut self,
        dom: &mut Dom,
        target: NodeId,
        event: UiEvent,
    ) -> Result<(), WidgetError> {
        if !self.is_open {
            return Ok(());
        }
        let inside_inner = self.inner.is_some_and(|i| dom.is_within(target, i));
        let inside_open = self.open.is_some_and(|o| dom.is_within(target, o));
        if !inside_inner && !inside_open {
            self.close_menu(dom, Some(event))?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
