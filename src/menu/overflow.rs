//! Horizontal overflow: measurement, visibility windows, scrolling, mega
//! panels.
//!
//! All geometry is cumulative arithmetic over host-measured widths in the
//! writing direction. The visible window starts at the current scroll
//! offset; recomputation is idempotent for unchanged geometry, so attach,
//! resize settling and both scroll operations all funnel through the same
//! refresh.

use crate::dom::Dom;

use super::item::Visibility;
use super::widget::Menu;
use super::{
    ATTR_ITEM_VISIBLE, CLASS_INNER_HAS_OVERFLOW, CLASS_ITEM_COL1, CLASS_ITEM_COL2,
    CLASS_ITEM_COL3, CLASS_ITEM_CURRENT, CLASS_ITEM_FULL, CLASS_MEGA_ALIGN_END,
};

/// Safety margin added to the container width before declaring overflow,
/// matching the container's padding.
pub const OVERFLOW_SAFETY_MARGIN: u32 = 16;

// ---------------------------------------------------------------------------
// OverflowWindow
// ---------------------------------------------------------------------------

/// Derived snapshot of the overflow state; never stored, only recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowWindow {
    /// Scroll offset of the item list from its leading edge.
    pub offset: u32,
    /// Index of the overflow boundary item, when one exists.
    pub last_visible: Option<usize>,
    /// Whether the items overflow the container at all.
    pub has_overflow: bool,
}

// ---------------------------------------------------------------------------
// Measurement and windowing
// ---------------------------------------------------------------------------

impl Menu {
    /// The current overflow snapshot.
    pub fn overflow_window(&self) -> OverflowWindow {
        OverflowWindow {
            offset: self.offset,
            last_visible: self.last_visible,
            has_overflow: self.has_overflow,
        }
    }

    /// Re-measure items and recompute the overflow window.
    ///
    /// The host hook for content changes outside the resize path. Idempotent
    /// for unchanged geometry.
    pub fn refresh_overflow(&mut self, dom: &mut Dom) {
        self.measure_items(dom);
        self.check_overflow(dom);
    }

    /// Re-measure every item and the total row width.
    pub(crate) fn measure_items(&mut self, dom: &mut Dom) {
        self.total_items_width = 0;
        for idx in 0..self.items.len() {
            self.measure_item(dom, idx);
            self.total_items_width += self.items[idx].width;
        }
    }

    /// Measure one item: record the current-page item, and on desktop clamp
    /// the link to the configured line count.
    ///
    /// The headless text-flow model: a link whose single-line text measures
    /// `w` needs `ceil(w / n)` of width to wrap into `n` lines.
    pub(crate) fn measure_item(&mut self, dom: &mut Dom, idx: usize) {
        let node = self.items[idx].node;
        let link = self.items[idx].link;

        if dom.has_class(node, CLASS_ITEM_CURRENT) {
            self.current_item = Some(idx);
        }

        if !self.is_desktop() {
            dom.set_style(link, "width", "auto");
            self.items[idx].width = dom.width(node);
            return;
        }

        if self.config.max_lines < 1 {
            self.items[idx].width = dom.width(node);
            return;
        }

        let natural = dom.width(link);
        let clamped = natural.div_ceil(self.config.max_lines);
        dom.set_style(link, "width", format!("{clamped}px"));
        // Caret and padding keep their measured share of the item.
        let chrome = dom.width(node).saturating_sub(natural);
        self.items[idx].width = chrome + clamped;
    }

    /// Decide whether the row overflows and recompute the visible window.
    ///
    /// Without overflow (or off desktop) every overflow artifact is reset:
    /// buttons hidden, list offset zeroed, visibility markers cleared.
    pub(crate) fn check_overflow(&mut self, dom: &mut Dom) {
        let (Some(list), Some(inner), Some(prev), Some(next)) =
            (self.items_list, self.inner, self.btn_previous, self.btn_next)
        else {
            return;
        };

        // Overflow only exists on desktop; the mobile flyout stacks items
        // vertically. Keeping the flag desktop-gated preserves the window
        // invariant: a boundary item exists exactly while overflowing.
        self.has_overflow = self.is_desktop()
            && self.total_items_width > dom.width(inner) + OVERFLOW_SAFETY_MARGIN;

        if !self.has_overflow {
            dom.set_style(prev, "display", "none");
            dom.set_style(next, "display", "none");
            dom.set_style(list, "left", "0");
            dom.remove_class(inner, CLASS_INNER_HAS_OVERFLOW);
            self.offset = 0;
            self.last_visible = None;
            for idx in 0..self.items.len() {
                let node = self.items[idx].node;
                dom.remove_attr(node, ATTR_ITEM_VISIBLE);
                self.items[idx].visibility = Visibility::Visible;
            }
            return;
        }

        dom.add_class(inner, CLASS_INNER_HAS_OVERFLOW);
        self.refresh_visibility(dom);
    }

    /// Recompute per-item visibility from the current offset.
    ///
    /// At offset zero the walk from the leading edge finds the overflow
    /// boundary: the first item whose trailing edge leaves the container.
    /// Scrolled, every item from the window start onward is visible and
    /// items before it are overflowed at the start.
    pub(crate) fn refresh_visibility(&mut self, dom: &mut Dom) {
        let (Some(inner), Some(next)) = (self.inner, self.btn_next) else {
            return;
        };

        for idx in 0..self.items.len() {
            let node = self.items[idx].node;
            dom.remove_attr(node, ATTR_ITEM_VISIBLE);
        }

        if self.offset == 0 {
            dom.set_style(next, "display", "flex");

            let window = dom.width(inner);
            self.last_visible = None;
            let mut edge = 0u32;
            for idx in 0..self.items.len() {
                edge += self.items[idx].width;
                if self.last_visible.is_some() {
                    self.items[idx].visibility = Visibility::OverflowedEnd;
                } else if edge > window {
                    self.last_visible = Some(idx);
                    self.items[idx].visibility = Visibility::OverflowedEnd;
                } else {
                    self.items[idx].visibility = Visibility::Visible;
                    let node = self.items[idx].node;
                    dom.set_attr(node, ATTR_ITEM_VISIBLE, "true");
                }
            }
        } else {
            let mut leading = 0u32;
            for idx in 0..self.items.len() {
                if leading >= self.offset {
                    self.items[idx].visibility = Visibility::Visible;
                    let node = self.items[idx].node;
                    dom.set_attr(node, ATTR_ITEM_VISIBLE, "true");
                } else {
                    self.items[idx].visibility = Visibility::OverflowedStart;
                }
                leading += self.items[idx].width;
            }
        }
    }

    /// Sum of item widths before `idx`: the item's leading edge in list
    /// coordinates.
    pub(crate) fn leading_edge(&self, idx: usize) -> u32 {
        self.items[..idx].iter().map(|it| it.width).sum()
    }

    // ── Scrolling ────────────────────────────────────────────────────

    /// Scroll forward: the boundary item becomes the new leading edge,
    /// shifted by the width the now-visible previous button takes up.
    pub fn scroll_next(&mut self, dom: &mut Dom) {
        let (Some(list), Some(prev), Some(next)) =
            (self.items_list, self.btn_previous, self.btn_next)
        else {
            return;
        };
        let Some(boundary) = self.last_visible else {
            return;
        };

        dom.set_style(prev, "display", "flex");
        dom.set_style(next, "display", "none");

        self.offset = self
            .leading_edge(boundary)
            .saturating_sub(dom.width(prev));
        dom.set_style(
            list,
            self.direction.leading_property(),
            format!("-{}px", self.offset),
        );
        dom.set_style(list, self.direction.trailing_property(), "auto");

        self.measure_items(dom);
        self.refresh_visibility(dom);
    }

    /// Scroll back to the leading edge.
    pub fn scroll_previous(&mut self, dom: &mut Dom) {
        let (Some(list), Some(next)) = (self.items_list, self.btn_next) else {
            return;
        };

        self.offset = 0;
        dom.set_style(list, self.direction.leading_property(), "0");
        dom.set_style(list, self.direction.trailing_property(), "auto");

        if let Some(prev) = self.btn_previous {
            dom.set_style(prev, "display", "none");
        }
        dom.set_style(next, "display", "flex");

        self.measure_items(dom);
        self.refresh_visibility(dom);
    }

    // ── Mega panel ───────────────────────────────────────────────────

    /// Position an item's mega panel: column count is a step function of the
    /// sub-item count; non-full panels flip to trailing anchoring when they
    /// would overflow the container.
    pub(crate) fn position_mega_panel(&mut self, dom: &mut Dom, idx: usize) {
        let Some(mega) = self.items[idx].mega else {
            return;
        };
        let Some(inner) = self.inner else {
            return;
        };
        let node = self.items[idx].node;

        let count = dom
            .query_attr_all(mega, &self.config.sub_item_selector)
            .len();
        if count < 5 {
            dom.add_class(node, CLASS_ITEM_COL1);
        } else if count < 9 {
            dom.add_class(node, CLASS_ITEM_COL2);
        } else if count < 13 {
            dom.add_class(node, CLASS_ITEM_COL3);
        } else {
            // Full width: anchored at the visible window start.
            dom.add_class(node, CLASS_ITEM_FULL);
            dom.set_style(
                mega,
                self.direction.leading_property(),
                format!("{}px", self.offset),
            );
            return;
        }

        let mega_width = dom.width(mega);
        let inner_width = dom.width(inner);
        let item_position = self.leading_edge(idx).saturating_sub(self.offset);
        if item_position + mega_width > inner_width {
            dom.add_class(mega, CLASS_MEGA_ALIGN_END);
        } else {
            dom.remove_class(mega, CLASS_MEGA_ALIGN_END);
        }
    }

    // ── Current-item emphasis ────────────────────────────────────────

    /// At attach, point the user toward the current page's item when it is
    /// scrolled out of view: the button that would reveal it gets the
    /// current marker.
    pub(crate) fn apply_current_emphasis(&mut self, dom: &mut Dom) {
        let Some(idx) = self.current_item else {
            return;
        };
        let (Some(prev), Some(next)) = (self.btn_previous, self.btn_next) else {
            return;
        };
        if !self.items[idx].is_visible() {
            dom.add_class(next, CLASS_ITEM_CURRENT);
        } else {
            dom.add_class(prev, CLASS_ITEM_CURRENT);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DeviceClass;
    use crate::menu::config::MenuConfig;
    use crate::menu::ATTR_ITEM_VISIBLE;
    use crate::testing::{ItemSpec, MenuMarkup, MenuPilot};

    /// Six 300px items in a 1000px container: overflow with boundary at
    /// index 3 (edges 300/600/900/1200...).
    fn overflow_pilot() -> MenuPilot {
        MenuPilot::attach_with(
            MenuMarkup::new()
                .with_items((0..6).map(|i| ItemSpec::plain(format!("Item {i}"), 300))),
            MenuConfig::new().with_max_lines(0),
        )
    }

    fn fitting_pilot() -> MenuPilot {
        MenuPilot::attach_with(
            MenuMarkup::new().with_items([
                ItemSpec::plain("One", 300),
                ItemSpec::plain("Two", 300),
                ItemSpec::plain("Three", 300),
            ]),
            MenuConfig::new().with_max_lines(0),
        )
    }

    // ── Windowing ────────────────────────────────────────────────────

    #[test]
    fn attach_detects_overflow_boundary() {
        let pilot = overflow_pilot();
        let window = pilot.menu().overflow_window();
        assert!(window.has_overflow);
        assert_eq!(window.offset, 0);
        assert_eq!(window.last_visible, Some(3));
    }

    #[test]
    fn visible_markers_follow_the_window() {
        let pilot = overflow_pilot();
        for idx in 0..3 {
            let node = pilot.handles.items[idx].node;
            assert_eq!(pilot.attr(node, ATTR_ITEM_VISIBLE), Some("true"));
        }
        for idx in 3..6 {
            let node = pilot.handles.items[idx].node;
            assert!(pilot.attr(node, ATTR_ITEM_VISIBLE).is_none());
        }
    }

    #[test]
    fn overflow_shows_next_button_and_class() {
        let pilot = overflow_pilot();
        assert_eq!(pilot.style(pilot.handles.btn_next, "display"), Some("flex"));
        assert!(pilot.has_class(pilot.handles.inner, CLASS_INNER_HAS_OVERFLOW));
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut pilot = overflow_pilot();
        let before = pilot.menu().overflow_window();

        let root = pilot.handles.root;
        let mut menu = pilot.registry.detach(&mut pilot.dom, root).unwrap();
        menu.refresh_overflow(&mut pilot.dom);
        menu.refresh_overflow(&mut pilot.dom);

        assert_eq!(menu.overflow_window(), before);
        for idx in 0..3 {
            let node = pilot.handles.items[idx].node;
            assert_eq!(pilot.dom.attr(node, ATTR_ITEM_VISIBLE), Some("true"));
        }
    }

    #[test]
    fn fitting_row_resets_everything() {
        let pilot = fitting_pilot();
        let window = pilot.menu().overflow_window();
        assert!(!window.has_overflow);
        assert_eq!(window.offset, 0);
        assert_eq!(window.last_visible, None);
        assert_eq!(pilot.style(pilot.handles.btn_next, "display"), Some("none"));
        assert_eq!(
            pilot.style(pilot.handles.btn_previous, "display"),
            Some("none")
        );
        assert_eq!(pilot.style(pilot.handles.list, "left"), Some("0"));
        assert!(!pilot.has_class(pilot.handles.inner, CLASS_INNER_HAS_OVERFLOW));
    }

    #[test]
    fn mobile_rendering_never_overflows() {
        let pilot = MenuPilot::attach_with(
            MenuMarkup::new()
                .with_viewport(800, DeviceClass::Desktop)
                .with_items((0..6).map(|i| ItemSpec::plain(format!("Item {i}"), 300))),
            MenuConfig::new().with_max_lines(0),
        );
        let window = pilot.menu().overflow_window();
        assert!(!window.has_overflow);
        assert_eq!(window.last_visible, None);
    }

    // ── Scrolling ────────────────────────────────────────────────────

    #[test]
    fn scroll_next_shifts_window_past_boundary() {
        let mut pilot = overflow_pilot();
        let root = pilot.handles.root;
        let mut menu = pilot.registry.detach(&mut pilot.dom, root).unwrap();

        menu.scroll_next(&mut pilot.dom);

        // Boundary leading edge 900, minus the 40px previous button.
        let window = menu.overflow_window();
        assert_eq!(window.offset, 860);
        assert_eq!(pilot.dom.style(pilot.handles.list, "left"), Some("-860px"));
        assert_eq!(pilot.dom.style(pilot.handles.list, "right"), Some("auto"));
        assert_eq!(
            pilot.dom.style(pilot.handles.btn_previous, "display"),
            Some("flex")
        );
        assert_eq!(pilot.dom.style(pilot.handles.btn_next, "display"), Some("none"));

        // Items before the window start are overflowed at the start.
        for idx in 0..3 {
            let node = pilot.handles.items[idx].node;
            assert!(pilot.dom.attr(node, ATTR_ITEM_VISIBLE).is_none());
        }
        for idx in 3..6 {
            let node = pilot.handles.items[idx].node;
            assert_eq!(pilot.dom.attr(node, ATTR_ITEM_VISIBLE), Some("true"));
        }
    }

    #[test]
    fn scroll_round_trip_restores_window() {
        let mut pilot = overflow_pilot();
        let root = pilot.handles.root;
        let mut menu = pilot.registry.detach(&mut pilot.dom, root).unwrap();
        let before = menu.overflow_window();

        menu.scroll_next(&mut pilot.dom);
        menu.scroll_previous(&mut pilot.dom);

        assert_eq!(menu.overflow_window(), before);
        assert_eq!(pilot.dom.style(pilot.handles.list, "left"), Some("0"));
        assert_eq!(
            pilot.dom.style(pilot.handles.btn_previous, "display"),
            Some("none")
        );
        assert_eq!(pilot.dom.style(pilot.handles.btn_next, "display"), Some("flex"));
        for idx in 0..3 {
            let node = pilot.handles.items[idx].node;
            assert_eq!(pilot.dom.attr(node, ATTR_ITEM_VISIBLE), Some("true"));
        }
    }

    #[test]
    fn scroll_next_without_boundary_is_noop() {
        let mut pilot = fitting_pilot();
        let root = pilot.handles.root;
        let mut menu = pilot.registry.detach(&mut pilot.dom, root).unwrap();

        menu.scroll_next(&mut pilot.dom);
        assert_eq!(menu.overflow_window().offset, 0);
        assert_eq!(pilot.dom.style(pilot.handles.btn_next, "display"), Some("none"));
    }

    #[test]
    fn rtl_scroll_uses_right_property() {
        use crate::geometry::TextDirection;
        let mut pilot = MenuPilot::attach_with(
            MenuMarkup::new()
                .with_direction(TextDirection::Rtl)
                .with_items((0..6).map(|i| ItemSpec::plain(format!("Item {i}"), 300))),
            MenuConfig::new().with_max_lines(0),
        );
        let root = pilot.handles.root;
        let mut menu = pilot.registry.detach(&mut pilot.dom, root).unwrap();

        menu.scroll_next(&mut pilot.dom);
        assert_eq!(pilot.dom.style(pilot.handles.list, "right"), Some("-860px"));
        assert_eq!(pilot.dom.style(pilot.handles.list, "left"), Some("auto"));
    }

    // ── Line clamping ────────────────────────────────────────────────

    #[test]
    fn desktop_links_clamp_to_max_lines() {
        let pilot = MenuPilot::attach(
            MenuMarkup::new().with_items([ItemSpec::plain("A long label", 200)]),
        );
        let link = pilot.handles.items[0].link;
        // ceil(200 / 2) with the default two-line clamp.
        assert_eq!(pilot.style(link, "width"), Some("100px"));
        assert_eq!(pilot.menu().items()[0].width, 100);
    }

    #[test]
    fn markup_overrides_max_lines() {
        let pilot = MenuPilot::attach(
            MenuMarkup::new()
                .with_max_lines_attr("4")
                .with_items([ItemSpec::plain("A long label", 200)]),
        );
        assert_eq!(pilot.menu().config().max_lines, 4);
        let link = pilot.handles.items[0].link;
        assert_eq!(pilot.style(link, "width"), Some("50px"));
    }

    #[test]
    fn invalid_max_lines_attr_ignored() {
        let pilot = MenuPilot::attach(
            MenuMarkup::new()
                .with_max_lines_attr("wide")
                .with_items([ItemSpec::plain("Label", 200)]),
        );
        assert_eq!(pilot.menu().config().max_lines, 2);
    }

    #[test]
    fn zero_max_lines_disables_clamp() {
        let pilot = MenuPilot::attach_with(
            MenuMarkup::new().with_items([ItemSpec::plain("Label", 200)]),
            MenuConfig::new().with_max_lines(0),
        );
        let link = pilot.handles.items[0].link;
        assert!(pilot.style(link, "width").is_none());
        assert_eq!(pilot.menu().items()[0].width, 200);
    }

    // ── Mega panel ───────────────────────────────────────────────────

    fn mega_pilot(sub_items: usize, mega_width: u32) -> MenuPilot {
        MenuPilot::attach_with(
            MenuMarkup::new().with_items([
                ItemSpec::plain("One", 300),
                ItemSpec::plain("Two", 300),
                ItemSpec::with_children("Topics", 300, sub_items).mega_width(mega_width),
            ]),
            MenuConfig::new().with_max_lines(0),
        )
    }

    fn open_third_item(pilot: &mut MenuPilot) {
        let caret = pilot.handles.caret(2);
        pilot.click(caret).unwrap();
    }

    #[test]
    fn mega_column_step_function() {
        for (count, class) in [
            (4, CLASS_ITEM_COL1),
            (8, CLASS_ITEM_COL2),
            (12, CLASS_ITEM_COL3),
            (13, CLASS_ITEM_FULL),
        ] {
            let mut pilot = mega_pilot(count, 300);
            open_third_item(&mut pilot);
            let node = pilot.handles.items[2].node;
            assert!(
                pilot.has_class(node, class),
                "{count} sub-items should map to {class}"
            );
        }
    }

    #[test]
    fn full_width_mega_anchors_at_offset() {
        let mut pilot = mega_pilot(13, 300);
        open_third_item(&mut pilot);
        let mega = pilot.handles.items[2].mega.unwrap();
        assert_eq!(pilot.style(mega, "left"), Some("0px"));
    }

    #[test]
    fn narrow_mega_keeps_leading_anchor() {
        // Item leading edge 600 + 300px panel fits in the 1000px container.
        let mut pilot = mega_pilot(6, 300);
        open_third_item(&mut pilot);
        let mega = pilot.handles.items[2].mega.unwrap();
        assert!(!pilot.has_class(mega, CLASS_MEGA_ALIGN_END));
    }

    #[test]
    fn wide_mega_flips_to_trailing_anchor() {
        // 600 + 500 overflows the 1000px container.
        let mut pilot = mega_pilot(6, 500);
        open_third_item(&mut pilot);
        let mega = pilot.handles.items[2].mega.unwrap();
        assert!(pilot.has_class(mega, CLASS_MEGA_ALIGN_END));
    }

    // ── Current-item emphasis ────────────────────────────────────────

    #[test]
    fn hidden_current_item_emphasizes_next_button() {
        let pilot = MenuPilot::attach_with(
            MenuMarkup::new().with_items(
                (0..6).map(|i| {
                    let spec = ItemSpec::plain(format!("Item {i}"), 300);
                    if i == 5 { spec.current() } else { spec }
                }),
            ),
            MenuConfig::new().with_max_lines(0),
        );
        assert!(pilot.has_class(pilot.handles.btn_next, CLASS_ITEM_CURRENT));
        assert!(!pilot.has_class(pilot.handles.btn_previous, CLASS_ITEM_CURRENT));
    }

    #[test]
    fn visible_current_item_emphasizes_previous_button() {
        let pilot = MenuPilot::attach_with(
            MenuMarkup::new().with_items(
                (0..6).map(|i| {
                    let spec = ItemSpec::plain(format!("Item {i}"), 300);
                    if i == 0 { spec.current() } else { spec }
                }),
            ),
            MenuConfig::new().with_max_lines(0),
        );
        assert!(pilot.has_class(pilot.handles.btn_previous, CLASS_ITEM_CURRENT));
        assert!(!pilot.has_class(pilot.handles.btn_next, CLASS_ITEM_CURRENT));
    }
}
