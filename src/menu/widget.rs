//! Widget lifecycle: the Menu struct, attach, teardown, event routing.
//!
//! Attach validates and scans first, then applies side effects; a fatal
//! error therefore leaves the document untouched. After attach the widget is
//! purely reactive: the registry routes host [`UiEvent`]s and due scheduler
//! [`Task`]s here, and the configured channel flags decide which event
//! families this instance handles.

use crate::dom::{Dom, NodeId};
use crate::error::WidgetError;
use crate::event::input::{Key, Modifiers, UiEvent};
use crate::event::notifier::{MenuEvent, Notifier};
use crate::geometry::TextDirection;
use crate::schedule::{Scheduler, Task, TaskId};

use super::config::MenuConfig;
use super::display::DisplayMode;
use super::focus_trap::FocusTrap;
use super::item::{MenuItem, Visibility};
use super::{
    ATTR_HAS_CHILDREN, ATTR_INITIALIZED, CLASS_BUTTON_LABEL, CLASS_FORCED_MOBILE, CLASS_NO_SCROLL,
    CLASS_OVERLAY, CLASS_RTL, CLASS_SITE_HEADER, CLASS_SUB_LINK, CLASS_TRANSITION,
};

/// Quiet period after the last resize before geometry is recomputed.
pub const RESIZE_DEBOUNCE_MS: u64 = 200;
/// Delay for the cosmetic one-shot deferrals (transition enable, overlay
/// positioning), giving layout time to settle.
pub const SETTLE_DELAY_MS: u64 = 500;

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// A disclosure-navigation widget attached to one root element.
///
/// Owns every scanned element reference and all interaction state. All
/// methods take the [`Dom`] explicitly; the widget holds ids, never nodes.
pub struct Menu {
    pub(crate) root: NodeId,
    pub(crate) config: MenuConfig,
    pub(crate) direction: TextDirection,

    // Scanned parts; every one is optional and degrades gracefully when the
    // markup omits it.
    pub(crate) open: Option<NodeId>,
    pub(crate) close: Option<NodeId>,
    pub(crate) toggle_label: Option<NodeId>,
    pub(crate) back: Option<NodeId>,
    pub(crate) inner: Option<NodeId>,
    pub(crate) items_list: Option<NodeId>,
    pub(crate) btn_previous: Option<NodeId>,
    pub(crate) btn_next: Option<NodeId>,
    pub(crate) items: Vec<MenuItem>,

    // Interaction state.
    pub(crate) display_mode: DisplayMode,
    pub(crate) is_open: bool,
    pub(crate) ignore_hover: bool,
    pub(crate) back_item: Option<usize>,
    pub(crate) current_item: Option<usize>,
    pub(crate) has_overflow: bool,
    pub(crate) offset: u32,
    pub(crate) last_visible: Option<usize>,
    pub(crate) total_items_width: u32,
    pub(crate) window_width: u32,
    pub(crate) resize_task: Option<TaskId>,
    pub(crate) trap: FocusTrap,
    pub(crate) notifier: Notifier<MenuEvent>,
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("root", &self.root)
            .field("display_mode", &self.display_mode)
            .field("is_open", &self.is_open)
            .field("items", &self.items.len())
            .field("has_overflow", &self.has_overflow)
            .field("offset", &self.offset)
            .finish()
    }
}

impl Menu {
    /// Lifecycle events this widget publishes.
    pub const SUPPORTED_EVENTS: [&'static str; 2] = ["onOpen", "onClose"];

    // ── Attach / teardown ────────────────────────────────────────────

    /// Scan the markup under `root`, initialize state, and apply the initial
    /// rendering (display mode, measurements, overflow, deferred timers).
    ///
    /// Fails with [`WidgetError::InvalidElement`] when `root` is missing or
    /// not an element, and [`WidgetError::MissingTarget`] when an item lacks
    /// its link; no side effect happens on failure.
    pub(crate) fn attach(
        dom: &mut Dom,
        scheduler: &mut Scheduler,
        root: NodeId,
        config: MenuConfig,
    ) -> Result<Self, WidgetError> {
        let root_data = dom.get(root).ok_or(WidgetError::InvalidElement)?;
        if !root_data.is_element() {
            return Err(WidgetError::InvalidElement);
        }
        let direction = root_data.direction;

        // Scan. Nothing below mutates the document.
        let open = dom.query_attr_one(root, &config.open_selector);
        let close = dom.query_attr_one(root, &config.close_selector);
        let toggle_label = open.and_then(|o| dom.query_class_one(o, CLASS_BUTTON_LABEL));
        let back = dom.query_attr_one(root, &config.back_selector);
        let inner = dom.query_attr_one(root, &config.inner_selector);
        let items_list = dom.query_attr_one(root, &config.list_selector);
        let btn_previous = dom.query_attr_one(root, &config.button_previous_selector);
        let btn_next = dom.query_attr_one(root, &config.button_next_selector);

        let mut items = Vec::new();
        for (index, node) in dom.query_attr_all(root, &config.item_selector).into_iter().enumerate() {
            let link = dom
                .query_attr_one(node, &config.link_selector)
                .ok_or_else(|| WidgetError::missing("link"))?;
            let caret = dom.query_attr_one(node, &config.caret_selector);
            let mega = dom.query_attr_one(node, &config.mega_selector);
            let sub_links = dom
                .query_attr_all(node, &config.sub_item_selector)
                .into_iter()
                .filter_map(|sub| dom.query_class_one(sub, CLASS_SUB_LINK))
                .collect();
            items.push(MenuItem {
                index,
                node,
                link,
                caret,
                mega,
                sub_links,
                has_children: dom.has_attr(node, ATTR_HAS_CHILDREN),
                width: dom.width(node),
                visibility: Visibility::Visible,
                expanded: false,
            });
        }

        // Markup may override the configured line clamp.
        let mut config = config;
        if let Some(value) = dom.attr(root, &config.max_lines_attribute) {
            match value.parse::<u32>() {
                Ok(n) => config.max_lines = n,
                Err(_) => log::warn!("menu: ignoring invalid max-lines value {value:?}"),
            }
        }
        if inner.is_none() {
            log::debug!("menu: no inner panel found, flyout features disabled");
        }

        let mut menu = Self {
            root,
            config,
            direction,
            open,
            close,
            toggle_label,
            back,
            inner,
            items_list,
            btn_previous,
            btn_next,
            items,
            display_mode: DisplayMode::detect(dom.device(), dom.viewport_width()),
            is_open: false,
            ignore_hover: false,
            back_item: None,
            current_item: None,
            has_overflow: false,
            offset: 0,
            last_visible: None,
            total_items_width: 0,
            window_width: dom.viewport_width(),
            resize_task: None,
            trap: FocusTrap::new(),
            notifier: Notifier::new(),
        };

        // Initial rendering side effects.
        menu.use_desktop_display(dom);
        menu.measure_items(dom);
        menu.position_menu_overlay(dom, scheduler);
        menu.check_overflow(dom);
        menu.apply_current_emphasis(dom);
        if menu.direction.is_rtl() {
            dom.add_class(root, CLASS_RTL);
        }
        scheduler.schedule(SETTLE_DELAY_MS, Task::EnableTransition { root });
        dom.set_attr(root, ATTR_INITIALIZED, "true");

        Ok(menu)
    }

    /// Reverse attach's marker; the registry removes the instance itself.
    /// Pending deferred tasks become no-ops once the root is unregistered.
    pub(crate) fn teardown(&mut self, dom: &mut Dom) {
        dom.remove_attr(self.root, ATTR_INITIALIZED);
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The root element this widget is attached to.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The active configuration.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Whether the mobile flyout is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The display mode from the last detection.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Whether desktop behavior currently applies.
    pub(crate) fn is_desktop(&self) -> bool {
        self.display_mode.is_desktop()
    }

    /// The scanned first-level items.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Whether focus containment is engaged.
    pub fn trap_active(&self) -> bool {
        self.trap.is_active()
    }

    /// Register a lifecycle event callback (`onOpen`, `onClose`).
    pub fn on(&mut self, event: impl Into<String>, callback: impl FnMut(&MenuEvent) + 'static) {
        self.notifier.on(event, callback);
    }

    // ── Display mode ─────────────────────────────────────────────────

    /// Re-detect the display mode and apply the forced-mobile class side
    /// effect. Returns whether desktop behavior applies.
    pub(crate) fn use_desktop_display(&mut self, dom: &mut Dom) -> bool {
        let mode = DisplayMode::detect(dom.device(), dom.viewport_width());
        self.display_mode = mode;
        match mode {
            DisplayMode::TabletForcedMobile => dom.add_class(self.root, CLASS_FORCED_MOBILE),
            DisplayMode::Desktop => dom.remove_class(self.root, CLASS_FORCED_MOBILE),
            DisplayMode::Mobile => {}
        }
        mode.is_desktop()
    }

    // ── Event routing ────────────────────────────────────────────────

    /// Route one host event through this widget.
    ///
    /// Channel flags gate whole families; document-level behaviors (outside
    /// click, global Escape, resize) run for any target, scoped behaviors
    /// only for targets inside this widget.
    pub fn handle_event(
        &mut self,
        dom: &mut Dom,
        scheduler: &mut Scheduler,
        event: UiEvent,
    ) -> Result<(), WidgetError> {
        match event {
            UiEvent::Click { target } => self.route_click(dom, target, event),
            UiEvent::TouchStart { target } => {
                if self.config.attach_touch_listener {
                    if let Some(idx) = self.caret_index(dom, target) {
                        if self.items[idx].has_children {
                            self.handle_touch_on_caret();
                        }
                    }
                }
                Ok(())
            }
            UiEvent::PointerEnter { target } => {
                if self.config.attach_hover_listener {
                    if let Some(idx) = self.owning_item(dom, target) {
                        if self.items[idx].has_children {
                            self.handle_hover_on_item(dom, idx);
                        }
                    }
                }
                Ok(())
            }
            UiEvent::PointerLeave { target } => {
                if self.config.attach_hover_listener {
                    if let Some(idx) = self.owning_item(dom, target) {
                        if self.items[idx].has_children {
                            self.handle_hover_off_item(dom, idx);
                        }
                    }
                }
                Ok(())
            }
            UiEvent::FocusIn { target } => {
                if self.config.attach_focus_listener {
                    let is_link = self.items.iter().any(|it| it.link == target);
                    let is_caret = self.items.iter().any(|it| it.caret == Some(target));
                    if is_link {
                        self.close_open_dropdown(dom);
                    }
                    if is_link || is_caret {
                        self.handle_focus_in(dom, target);
                    }
                }
                Ok(())
            }
            UiEvent::KeyUp { target, key } => {
                // Containment intercepts Tab independently of the keyboard
                // channel, like a trap binding its own listeners.
                if self.trap.is_active() && key.code == Key::Tab {
                    self.trap.handle_tab(
                        dom,
                        self.root,
                        key.modifiers.contains(Modifiers::SHIFT),
                    );
                    return Ok(());
                }
                if self.config.attach_key_listener {
                    if let Some(t) = target {
                        if self.is_nav_element(t) {
                            self.handle_keyboard(dom, t, key);
                        }
                    }
                    self.handle_keyboard_global(dom, key)?;
                }
                Ok(())
            }
            UiEvent::Resize => {
                if self.config.attach_resize_listener {
                    self.handle_resize(dom, scheduler);
                }
                Ok(())
            }
        }
    }

    fn route_click(
        &mut self,
        dom: &mut Dom,
        target: NodeId,
        event: UiEvent,
    ) -> Result<(), WidgetError> {
        if !self.config.attach_click_listener {
            return Ok(());
        }
        if self.open.is_some_and(|b| dom.is_within(target, b)) {
            self.toggle_menu(dom, event)?;
        } else if self.close.is_some_and(|b| dom.is_within(target, b)) {
            self.close_menu(dom, Some(event))?;
        } else if self.back.is_some_and(|b| dom.is_within(target, b)) {
            self.handle_back(dom);
        } else if self.btn_previous.is_some_and(|b| dom.is_within(target, b)) {
            self.scroll_previous(dom);
        } else if self.btn_next.is_some_and(|b| dom.is_within(target, b)) {
            self.scroll_next(dom);
        } else if let Some(idx) = self.caret_index(dom, target) {
            self.handle_caret_click(dom, idx)?;
        }
        // The document-level listener sees the same click after the scoped
        // ones, like bubbling to the document.
        self.handle_click_global(dom, target, event)
    }

    // ── Target resolution ────────────────────────────────────────────

    /// The item whose caret contains `target`, if any.
    pub(crate) fn caret_index(&self, dom: &Dom, target: NodeId) -> Option<usize> {
        self.items.iter().position(|it| {
            it.caret.is_some_and(|caret| dom.is_within(target, caret))
        })
    }

    /// The item whose subtree contains `target`, if any.
    pub(crate) fn owning_item(&self, dom: &Dom, target: NodeId) -> Option<usize> {
        self.items
            .iter()
            .position(|it| dom.is_within(target, it.node))
    }

    /// Whether `target` is one of the keyboard-navigable elements: a
    /// first-level link, a caret, or a sub-link.
    fn is_nav_element(&self, target: NodeId) -> bool {
        self.items.iter().any(|it| {
            it.link == target
                || it.caret == Some(target)
                || it.sub_links.contains(&target)
        })
    }

    /// The root's expansion attribute, used to tell the mobile-expanded
    /// widget from the desktop/closed one.
    pub(crate) fn root_expanded_is(&self, dom: &Dom, value: &str) -> bool {
        dom.attr(self.root, super::ATTR_EXPANDED) == Some(value)
    }

    // ── Resize handling ──────────────────────────────────────────────

    /// React to a viewport resize: immediate cosmetic resets, then a
    /// debounced geometry recomputation after the quiet period.
    pub(crate) fn handle_resize(&mut self, dom: &mut Dom, scheduler: &mut Scheduler) {
        // Mobile browsers fire resize while scrolling; a width that did not
        // change is not a real resize.
        if dom.viewport_width() == self.window_width {
            return;
        }

        dom.remove_class(self.root, CLASS_TRANSITION);
        if self.direction.is_rtl() {
            dom.add_class(self.root, CLASS_RTL);
        } else {
            dom.remove_class(self.root, CLASS_RTL);
        }

        if let Some(pending) = self.resize_task.take() {
            scheduler.cancel(pending);
        }
        self.resize_task = Some(scheduler.schedule(
            RESIZE_DEBOUNCE_MS,
            Task::ResizeSettled { root: self.root },
        ));
    }

    /// The resize quiet period elapsed: recompute everything that depends on
    /// viewport geometry.
    pub(crate) fn on_resize_settled(&mut self, dom: &mut Dom, scheduler: &mut Scheduler) {
        self.resize_task = None;
        dom.remove_class(self.root, CLASS_FORCED_MOBILE);

        if self.use_desktop_display(dom) {
            self.trap.deactivate(dom, self.root);
        }
        self.measure_items(dom);
        self.check_overflow(dom);
        self.position_menu_overlay(dom, scheduler);
        dom.add_class(self.root, CLASS_TRANSITION);
        self.window_width = dom.viewport_width();
    }

    // ── Deferred cosmetic work ───────────────────────────────────────

    /// Enable CSS transitions once initial layout settled.
    pub(crate) fn on_enable_transition(&mut self, dom: &mut Dom) {
        dom.add_class(self.root, CLASS_TRANSITION);
    }

    /// Align the mobile overlay and inner panel below the site header.
    pub(crate) fn on_position_overlay(&mut self, dom: &mut Dom) {
        let Some(doc_root) = dom.root() else { return };
        let Some(header) = dom.query_class_one(doc_root, CLASS_SITE_HEADER) else {
            return;
        };
        let bottom = dom.height(header);
        if let Some(overlay) = dom.query_class_one(self.root, CLASS_OVERLAY) {
            dom.set_style(overlay, "top", format!("{bottom}px"));
        }
        if let Some(inner) = self.inner {
            dom.set_style(inner, "top", format!("{bottom}px"));
        }
    }

    /// Decide overlay placement for the current display mode. On mobile the
    /// actual positioning is deferred until layout settles; on desktop the
    /// overrides are cleared immediately.
    pub(crate) fn position_menu_overlay(&mut self, dom: &mut Dom, scheduler: &mut Scheduler) {
        if !self.is_desktop() {
            if self.is_open {
                self.disable_scroll(dom);
            }
            scheduler.schedule(SETTLE_DELAY_MS, Task::PositionOverlay { root: self.root });
        } else {
            self.enable_scroll(dom);
            if let Some(inner) = self.inner {
                dom.clear_style(inner, "top");
            }
            if let Some(overlay) = dom.query_class_one(self.root, CLASS_OVERLAY) {
                dom.clear_style(overlay, "top");
            }
        }
    }

    // ── Page scroll lock ─────────────────────────────────────────────

    /// Lock page scrolling behind the flyout.
    pub(crate) fn disable_scroll(&self, dom: &mut Dom) {
        if let Some(body) = dom.root() {
            dom.add_class(body, CLASS_NO_SCROLL);
        }
    }

    /// Release the page scroll lock.
    pub(crate) fn enable_scroll(&self, dom: &mut Dom) {
        if let Some(body) = dom.root() {
            dom.remove_class(body, CLASS_NO_SCROLL);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{DeviceClass, NodeData};
    use crate::menu::ATTR_EXPANDED;
    use crate::registry::ComponentRegistry;
    use crate::testing::{ItemSpec, MenuMarkup, MenuPilot};

    fn desktop_markup() -> MenuMarkup {
        MenuMarkup::new().with_items([
            ItemSpec::with_children("Topics", 300, 4),
            ItemSpec::plain("About", 300),
        ])
    }

    fn mobile_markup() -> MenuMarkup {
        desktop_markup().with_viewport(800, DeviceClass::Desktop)
    }

    // ── Attach ───────────────────────────────────────────────────────

    #[test]
    fn attach_marks_root_initialized() {
        let pilot = MenuPilot::attach(desktop_markup());
        assert_eq!(pilot.attr(pilot.handles.root, ATTR_INITIALIZED), Some("true"));
    }

    #[test]
    fn attach_detects_desktop_mode() {
        let pilot = MenuPilot::attach(desktop_markup());
        assert!(pilot.menu().display_mode().is_desktop());
    }

    #[test]
    fn attach_on_tablet_forces_mobile_class() {
        let pilot = MenuPilot::attach(
            desktop_markup().with_viewport(1280, DeviceClass::Tablet),
        );
        assert_eq!(
            pilot.menu().display_mode(),
            DisplayMode::TabletForcedMobile
        );
        assert!(pilot.has_class(pilot.handles.root, CLASS_FORCED_MOBILE));
    }

    #[test]
    fn attach_rtl_adds_direction_class() {
        let pilot = MenuPilot::attach(
            desktop_markup().with_direction(TextDirection::Rtl),
        );
        assert!(pilot.has_class(pilot.handles.root, CLASS_RTL));
    }

    #[test]
    fn attach_without_item_link_fails_cleanly() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let root = dom.insert_child(body, NodeData::new("nav"));
        let inner = dom.insert_child(root, NodeData::new("div").with_attr("data-menu-inner", ""));
        let list = dom.insert_child(inner, NodeData::new("ul").with_attr("data-menu-list", ""));
        let _item = dom.insert_child(list, NodeData::new("li").with_attr("data-menu-item", ""));

        let mut scheduler = Scheduler::new();
        let mut registry = ComponentRegistry::new();
        let err = registry
            .attach(&mut dom, &mut scheduler, root, MenuConfig::default())
            .unwrap_err();
        assert!(matches!(err, WidgetError::MissingTarget(_)));

        // All-or-nothing: no marker, no scheduled work.
        assert!(!dom.has_attr(root, ATTR_INITIALIZED));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn transition_class_arrives_after_settle_delay() {
        let mut pilot = MenuPilot::attach(desktop_markup());
        assert!(!pilot.has_class(pilot.handles.root, CLASS_TRANSITION));
        pilot.advance(SETTLE_DELAY_MS);
        assert!(pilot.has_class(pilot.handles.root, CLASS_TRANSITION));
    }

    // ── Channel flags ────────────────────────────────────────────────

    #[test]
    fn disabled_click_channel_ignores_clicks() {
        let mut pilot = MenuPilot::attach_with(
            mobile_markup(),
            MenuConfig::new().with_click_listener(false),
        );
        pilot.click(pilot.handles.open).unwrap();
        assert!(!pilot.menu().is_open());
        assert_eq!(pilot.attr(pilot.handles.root, ATTR_EXPANDED), Some("false"));
    }

    #[test]
    fn disabled_hover_channel_ignores_hover() {
        let mut pilot = MenuPilot::attach_with(
            desktop_markup(),
            MenuConfig::new().with_hover_listener(false),
        );
        let item = pilot.handles.items[0].node;
        pilot.hover_enter(item).unwrap();
        assert!(pilot.attr(item, ATTR_EXPANDED).is_none());
    }

    #[test]
    fn disabled_key_channel_ignores_keys() {
        let mut pilot = MenuPilot::attach_with(
            desktop_markup(),
            MenuConfig::new().with_key_listener(false),
        );
        let link = pilot.handles.items[0].link;
        pilot.key(link, Key::ArrowRight).unwrap();
        assert!(pilot.focused().is_none());
    }

    #[test]
    fn disabled_touch_channel_never_suppresses_hover() {
        let mut pilot = MenuPilot::attach_with(
            desktop_markup(),
            MenuConfig::new().with_touch_listener(false),
        );
        let caret = pilot.handles.caret(0);
        let item = pilot.handles.items[0].node;
        pilot.touch(caret).unwrap();
        pilot.hover_enter(item).unwrap();
        assert_eq!(pilot.attr(item, ATTR_EXPANDED), Some("true"));
    }

    #[test]
    fn disabled_resize_channel_ignores_resize() {
        let mut pilot = MenuPilot::attach_with(
            desktop_markup(),
            MenuConfig::new().with_resize_listener(false),
        );
        pilot.resize(800).unwrap();
        pilot.advance(1_000);
        assert!(pilot.menu().display_mode().is_desktop());
    }

    #[test]
    fn disabled_focus_channel_ignores_focus_in() {
        let mut pilot = MenuPilot::attach_with(
            MenuMarkup::new()
                .with_items((0..6).map(|i| ItemSpec::plain(format!("Item {i}"), 300))),
            MenuConfig::new().with_max_lines(0).with_focus_listener(false),
        );
        let hidden_link = pilot.handles.items[4].link;
        pilot.focus_in(hidden_link).unwrap();
        assert_eq!(pilot.menu().overflow_window().offset, 0);
    }

    // ── Resize debounce ──────────────────────────────────────────────

    #[test]
    fn resize_defers_mode_change_until_quiet() {
        let mut pilot = MenuPilot::attach(desktop_markup());
        pilot.resize(800).unwrap();

        // Inside the quiet period nothing is recomputed yet.
        assert!(pilot.menu().display_mode().is_desktop());
        pilot.advance(RESIZE_DEBOUNCE_MS - 1);
        assert!(pilot.menu().display_mode().is_desktop());

        pilot.advance(1);
        assert!(pilot.menu().display_mode().is_mobile_rendering());
    }

    #[test]
    fn rapid_resizes_collapse_into_one_settle() {
        let mut pilot = MenuPilot::attach(desktop_markup());
        pilot.advance(SETTLE_DELAY_MS); // clear attach deferrals

        pilot.resize(900).unwrap();
        pilot.advance(100);
        pilot.resize(1100).unwrap();
        pilot.advance(100);
        pilot.resize(1400).unwrap();

        // Only the last settle task is pending.
        assert_eq!(pilot.scheduler.pending_count(), 1);
        pilot.advance(RESIZE_DEBOUNCE_MS);
        assert!(pilot.menu().display_mode().is_desktop());
    }

    #[test]
    fn resize_to_same_width_is_ignored() {
        let mut pilot = MenuPilot::attach(desktop_markup());
        pilot.advance(SETTLE_DELAY_MS);
        pilot.dispatch(UiEvent::Resize).unwrap();
        assert!(pilot.scheduler.is_idle());
    }

    #[test]
    fn resize_to_desktop_releases_focus_trap() {
        let mut pilot = MenuPilot::attach(mobile_markup());
        pilot.click(pilot.handles.open).unwrap();
        assert!(pilot.menu().trap_active());

        pilot.resize(1400).unwrap();
        pilot.advance(RESIZE_DEBOUNCE_MS);
        assert!(!pilot.menu().trap_active());
        assert!(pilot.menu().display_mode().is_desktop());
    }

    // ── Overlay positioning ──────────────────────────────────────────

    #[test]
    fn mobile_overlay_aligns_below_header_after_settle() {
        let mut pilot = MenuPilot::attach(mobile_markup());
        assert!(pilot.style(pilot.handles.overlay, "top").is_none());

        pilot.advance(SETTLE_DELAY_MS);
        assert_eq!(pilot.style(pilot.handles.overlay, "top"), Some("80px"));
        assert_eq!(pilot.style(pilot.handles.inner, "top"), Some("80px"));
    }

    #[test]
    fn desktop_clears_overlay_offsets() {
        let mut pilot = MenuPilot::attach(mobile_markup());
        pilot.advance(SETTLE_DELAY_MS);
        assert!(pilot.style(pilot.handles.inner, "top").is_some());

        pilot.resize(1400).unwrap();
        pilot.advance(RESIZE_DEBOUNCE_MS);
        assert!(pilot.style(pilot.handles.inner, "top").is_none());
        assert!(pilot.style(pilot.handles.overlay, "top").is_none());
    }

    #[test]
    fn overlay_positioning_without_header_is_skipped() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let root = dom.insert_child(
            body,
            NodeData::new("nav").with_attr("aria-expanded", "false"),
        );
        let inner = dom.insert_child(root, NodeData::new("div").with_attr("data-menu-inner", ""));
        let list = dom.insert_child(inner, NodeData::new("ul").with_attr("data-menu-list", ""));
        let item = dom.insert_child(list, NodeData::new("li").with_attr("data-menu-item", ""));
        let _link = dom.insert_child(item, NodeData::new("a").with_attr("data-menu-link", ""));
        dom.set_viewport_width(800);

        let mut scheduler = Scheduler::new();
        let mut registry = ComponentRegistry::new();
        registry
            .attach(&mut dom, &mut scheduler, root, MenuConfig::default())
            .unwrap();
        for task in scheduler.advance(1_000) {
            registry.run_task(&mut dom, &mut scheduler, task);
        }
        assert!(dom.style(inner, "top").is_none());
    }
}
