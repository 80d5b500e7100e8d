//! Roving-focus keyboard navigation across links, carets and sub-links.
//!
//! Arrow keys move focus within and between items, Escape backs out of the
//! current context, and focus arriving on a scrolled-out item pulls it into
//! view. Whether the root carries `aria-expanded="false"` distinguishes the
//! desktop/closed widget from the mobile-expanded one.

use crate::dom::{Dom, NodeId};
use crate::error::WidgetError;
use crate::event::input::{Key, KeyEvent};

use super::widget::Menu;
use super::ATTR_EXPANDED;

impl Menu {
    // ── Widget-scoped keys ───────────────────────────────────────────

    /// Handle a key released on a link, caret or sub-link.
    pub(crate) fn handle_keyboard(&mut self, dom: &mut Dom, target: NodeId, key: KeyEvent) {
        let item_idx = self.owning_item(dom, target);

        // Escape backs out: drop focus, and on the closed widget return
        // focus to the caret and force-close any open dropdown.
        if key.code == Key::Escape {
            if dom.focused() == Some(target) {
                dom.blur(target);
            }
            if self.root_expanded_is(dom, "false") {
                if let Some(caret) = item_idx.and_then(|idx| self.items[idx].caret) {
                    dom.focus(caret);
                }
                self.close_open_dropdown(dom);
            }
            return;
        }

        let is_caret = item_idx.is_some_and(|idx| self.items[idx].caret == Some(target));
        let is_link = item_idx.is_some_and(|idx| self.items[idx].link == target);

        // ArrowDown on a caret of the closed widget opens the dropdown the
        // way hover would and dives into the first sub-link.
        if is_caret && key.code == Key::ArrowDown && self.root_expanded_is(dom, "false") {
            if let Some(idx) = item_idx {
                if let Some(&first) = self.items[idx].sub_links.first() {
                    self.handle_hover_on_item(dom, idx);
                    dom.focus(first);
                    return;
                }
            }
        }

        // First-level movement between links and carets.
        if is_link || is_caret {
            let Some(idx) = item_idx else { return };
            match key.code {
                Key::ArrowLeft | Key::ArrowUp => {
                    // The caret's leading sibling is its own link.
                    if is_caret {
                        let link = self.items[idx].link;
                        dom.focus(link);
                        return;
                    }
                    if idx > 0 {
                        let prev = &self.items[idx - 1];
                        if prev.has_children {
                            if let Some(caret) = prev.caret {
                                dom.focus(caret);
                            }
                        } else {
                            let link = prev.link;
                            dom.focus(link);
                        }
                    }
                }
                Key::ArrowRight | Key::ArrowDown => {
                    // The link's trailing sibling is its caret, when one
                    // exists.
                    if is_link {
                        if let Some(caret) = self.items[idx].caret {
                            dom.focus(caret);
                            return;
                        }
                    }
                    if idx + 1 < self.items.len() {
                        let link = self.items[idx + 1].link;
                        dom.focus(link);
                    }
                }
                _ => {}
            }
            return;
        }

        // Sub-link movement inside an open panel.
        if let Some((idx, sub_idx)) = self.sub_link_position(target) {
            match key.code {
                Key::ArrowDown => {
                    if let Some(&next) = self.items[idx].sub_links.get(sub_idx + 1) {
                        dom.focus(next);
                    }
                }
                Key::ArrowUp => {
                    if sub_idx > 0 {
                        let prev = self.items[idx].sub_links[sub_idx - 1];
                        dom.focus(prev);
                    } else if let Some(caret) = self.expanded_item_caret(dom) {
                        dom.focus(caret);
                    }
                }
                _ => {}
            }
        }
    }

    // ── Document-scoped keys ─────────────────────────────────────────

    /// Handle a key released anywhere in the document: Escape closes the
    /// open flyout and clears every expansion marker.
    pub(crate) fn handle_keyboard_global(
        &mut self,
        dom: &mut Dom,
        key: KeyEvent,
    ) -> Result<(), WidgetError> {
        if key.code != Key::Escape {
            return Ok(());
        }
        if self.root_expanded_is(dom, "true") {
            self.close_menu(dom, None)?;
        }
        for idx in 0..self.items.len() {
            let node = self.items[idx].node;
            dom.set_attr(node, ATTR_EXPANDED, "false");
            self.items[idx].expanded = false;
            if let Some(caret) = self.items[idx].caret {
                dom.set_attr(caret, ATTR_EXPANDED, "false");
            }
        }
        Ok(())
    }

    // ── Focus arrival ────────────────────────────────────────────────

    /// Focus landed on a link or caret: with desktop overflow active, bring
    /// a scrolled-out item into view by scrolling toward it.
    pub(crate) fn handle_focus_in(&mut self, dom: &mut Dom, target: NodeId) {
        if !(self.is_desktop() && self.has_overflow) {
            return;
        }
        let Some(idx) = self.owning_item(dom, target) else {
            return;
        };
        if !self.items[idx].is_visible() {
            if self.offset == 0 {
                self.scroll_next(dom);
            } else {
                self.scroll_previous(dom);
            }
        }
    }

    // ── Lookup helpers ───────────────────────────────────────────────

    /// Find `target` among sub-links: `(item index, sub-link index)`.
    fn sub_link_position(&self, target: NodeId) -> Option<(usize, usize)> {
        self.items.iter().enumerate().find_map(|(idx, it)| {
            it.sub_links
                .iter()
                .position(|&s| s == target)
                .map(|sub_idx| (idx, sub_idx))
        })
    }

    /// The caret of whichever item is currently expanded.
    fn expanded_item_caret(&self, dom: &Dom) -> Option<NodeId> {
        self.items
            .iter()
            .find(|it| dom.attr(it.node, ATTR_EXPANDED) == Some("true"))
            .and_then(|it| it.caret)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
