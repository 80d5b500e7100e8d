//! Pilot: programmatic interaction with a headless menu widget.
//!
//! [`MenuMarkup`] builds the tree the templating collaborator would render
//! (roles, labels, measured geometry); [`MenuPilot`] owns the document,
//! registry and scheduler, attaches a menu, and simulates user input
//! against it.

use crate::dom::{DeviceClass, Dom, NodeData, NodeId};
use crate::error::WidgetError;
use crate::event::input::{Key, KeyEvent, Modifiers, UiEvent};
use crate::geometry::TextDirection;
use crate::menu::{Menu, MenuConfig, CLASS_BUTTON_LABEL, CLASS_OVERLAY, CLASS_SITE_HEADER, CLASS_SUB_LINK};
use crate::menu::{ATTR_HAS_CHILDREN, CLASS_ITEM_CURRENT};
use crate::registry::ComponentRegistry;
use crate::schedule::Scheduler;

// ---------------------------------------------------------------------------
// ItemSpec / MenuMarkup
// ---------------------------------------------------------------------------

/// Blueprint for one first-level item.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    /// Link label.
    pub label: String,
    /// Measured width of both the item and its link.
    pub width: u32,
    /// Number of sub-items; zero means a plain link without caret or mega
    /// panel.
    pub sub_items: usize,
    /// Measured width of the mega panel, when sub-items exist.
    pub mega_width: u32,
    /// Whether the item carries the current-page marker.
    pub current: bool,
}

impl ItemSpec {
    /// A plain item without children.
    pub fn plain(label: impl Into<String>, width: u32) -> Self {
        Self {
            label: label.into(),
            width,
            sub_items: 0,
            mega_width: 0,
            current: false,
        }
    }

    /// An item with a caret and `sub_items` children in a mega panel.
    pub fn with_children(label: impl Into<String>, width: u32, sub_items: usize) -> Self {
        Self {
            label: label.into(),
            width,
            sub_items,
            mega_width: 300,
            current: false,
        }
    }

    /// Set the mega panel width (builder).
    pub fn mega_width(mut self, width: u32) -> Self {
        self.mega_width = width;
        self
    }

    /// Mark as the current page's item (builder).
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

/// Blueprint for a whole menu document.
#[derive(Debug, Clone)]
pub struct MenuMarkup {
    /// Host viewport width.
    pub viewport_width: u32,
    /// Host device class.
    pub device: DeviceClass,
    /// Measured width of the inner panel.
    pub inner_width: u32,
    /// Measured width of each scroll button.
    pub button_width: u32,
    /// Measured height of the site header above the menu.
    pub header_height: u32,
    /// Writing direction on the root.
    pub direction: TextDirection,
    /// Toggle label while closed.
    pub label_open: String,
    /// Toggle label while open.
    pub label_close: String,
    /// Optional max-lines override attribute on the root.
    pub max_lines_attr: Option<String>,
    /// First-level items.
    pub items: Vec<ItemSpec>,
}

impl Default for MenuMarkup {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            device: DeviceClass::Desktop,
            inner_width: 1000,
            button_width: 40,
            header_height: 80,
            direction: TextDirection::Ltr,
            label_open: "Menu".into(),
            label_close: "Close".into(),
            max_lines_attr: None,
            items: Vec::new(),
        }
    }
}

impl MenuMarkup {
    /// A desktop-sized document with no items yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add items (builder).
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemSpec>) -> Self {
        self.items.extend(items);
        self
    }

    /// Set viewport width and device (builder).
    pub fn with_viewport(mut self, width: u32, device: DeviceClass) -> Self {
        self.viewport_width = width;
        self.device = device;
        self
    }

    /// Set the inner panel width (builder).
    pub fn with_inner_width(mut self, width: u32) -> Self {
        self.inner_width = width;
        self
    }

    /// Set the writing direction (builder).
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the max-lines override attribute (builder).
    pub fn with_max_lines_attr(mut self, value: impl Into<String>) -> Self {
        self.max_lines_attr = Some(value.into());
        self
    }

    /// Build the document tree and return handles to every part.
    pub fn build(&self, dom: &mut Dom) -> MenuHandles {
        let body = dom.insert(NodeData::new("body"));
        let header = dom.insert_child(
            body,
            NodeData::new("header")
                .with_class(CLASS_SITE_HEADER)
                .with_measured(self.viewport_width, self.header_height),
        );

        let mut root_data = NodeData::new("nav")
            .with_attr("aria-expanded", "false")
            .with_attr("data-menu-label-open", self.label_open.clone())
            .with_attr("data-menu-label-close", self.label_close.clone())
            .with_direction(self.direction);
        if let Some(value) = &self.max_lines_attr {
            root_data = root_data.with_attr("data-menu-max-lines", value.clone());
        }
        let root = dom.insert_child(body, root_data);

        let overlay = dom.insert_child(root, NodeData::new("div").with_class(CLASS_OVERLAY));

        let open = dom.insert_child(
            root,
            NodeData::new("button")
                .with_attr("data-menu-open", "")
                .focusable(true),
        );
        let open_label = dom.insert_child(
            open,
            NodeData::new("span")
                .with_class(CLASS_BUTTON_LABEL)
                .with_content(self.label_open.clone()),
        );

        let inner = dom.insert_child(
            root,
            NodeData::new("div")
                .with_attr("data-menu-inner", "")
                .with_measured(self.inner_width, 60),
        );
        let close = dom.insert_child(
            inner,
            NodeData::new("button")
                .with_attr("data-menu-close", "")
                .focusable(true),
        );
        let back = dom.insert_child(
            inner,
            NodeData::new("button")
                .with_attr("data-menu-back", "")
                .focusable(true),
        );
        let btn_previous = dom.insert_child(
            inner,
            NodeData::new("button")
                .with_attr("data-menu-items-previous", "")
                .with_measured(self.button_width, 40)
                .focusable(true),
        );
        let btn_next = dom.insert_child(
            inner,
            NodeData::new("button")
                .with_attr("data-menu-items-next", "")
                .with_measured(self.button_width, 40)
                .focusable(true),
        );
        let list = dom.insert_child(inner, NodeData::new("ul").with_attr("data-menu-list", ""));

        let mut items = Vec::new();
        for spec in &self.items {
            let mut item_data = NodeData::new("li")
                .with_attr("data-menu-item", "")
                .with_measured(spec.width, 40);
            if spec.sub_items > 0 {
                item_data = item_data.with_attr(ATTR_HAS_CHILDREN, "");
            }
            if spec.current {
                item_data = item_data.with_class(CLASS_ITEM_CURRENT);
            }
            let node = dom.insert_child(list, item_data);

            let link = dom.insert_child(
                node,
                NodeData::new("a")
                    .with_attr("data-menu-link", "")
                    .with_content(spec.label.clone())
                    .with_measured(spec.width, 40)
                    .focusable(true),
            );

            let mut caret = None;
            let mut mega = None;
            let mut sub_links = Vec::new();
            if spec.sub_items > 0 {
                caret = Some(dom.insert_child(
                    node,
                    NodeData::new("button")
                        .with_attr("data-menu-caret", "")
                        .focusable(true),
                ));
                let mega_node = dom.insert_child(
                    node,
                    NodeData::new("div")
                        .with_attr("data-menu-mega", "")
                        .with_measured(spec.mega_width, 400),
                );
                let sub_list = dom.insert_child(mega_node, NodeData::new("ul"));
                for s in 0..spec.sub_items {
                    let sub_item = dom.insert_child(
                        sub_list,
                        NodeData::new("li").with_attr("data-menu-subitem", ""),
                    );
                    let sub_link = dom.insert_child(
                        sub_item,
                        NodeData::new("a")
                            .with_class(CLASS_SUB_LINK)
                            .with_content(format!("{} {}", spec.label, s + 1))
                            .focusable(true),
                    );
                    sub_links.push(sub_link);
                }
                mega = Some(mega_node);
            }

            items.push(ItemHandles {
                node,
                link,
                caret,
                mega,
                sub_links,
            });
        }

        MenuHandles {
            body,
            header,
            root,
            overlay,
            open,
            open_label,
            close,
            back,
            inner,
            list,
            btn_previous,
            btn_next,
            items,
        }
    }
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Node handles for one built item.
#[derive(Debug, Clone)]
pub struct ItemHandles {
    pub node: NodeId,
    pub link: NodeId,
    pub caret: Option<NodeId>,
    pub mega: Option<NodeId>,
    pub sub_links: Vec<NodeId>,
}

/// Node handles for every part of a built menu document.
#[derive(Debug, Clone)]
pub struct MenuHandles {
    pub body: NodeId,
    pub header: NodeId,
    pub root: NodeId,
    pub overlay: NodeId,
    pub open: NodeId,
    pub open_label: NodeId,
    pub close: NodeId,
    pub back: NodeId,
    pub inner: NodeId,
    pub list: NodeId,
    pub btn_previous: NodeId,
    pub btn_next: NodeId,
    pub items: Vec<ItemHandles>,
}

impl MenuHandles {
    /// The caret of item `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the item has no caret.
    pub fn caret(&self, idx: usize) -> NodeId {
        self.items[idx].caret.expect("item has a caret")
    }
}

// ---------------------------------------------------------------------------
// MenuPilot
// ---------------------------------------------------------------------------

/// A headless host driving one attached menu.
pub struct MenuPilot {
    pub dom: Dom,
    pub registry: ComponentRegistry,
    pub scheduler: Scheduler,
    pub handles: MenuHandles,
}

impl MenuPilot {
    /// Build the markup and attach a menu with the default configuration.
    pub fn attach(markup: MenuMarkup) -> Self {
        Self::attach_with(markup, MenuConfig::default())
    }

    /// Build the markup and attach a menu with a custom configuration.
    pub fn attach_with(markup: MenuMarkup, config: MenuConfig) -> Self {
        let mut dom = Dom::new();
        dom.set_viewport_width(markup.viewport_width);
        dom.set_device(markup.device);
        let handles = markup.build(&mut dom);

        let mut registry = ComponentRegistry::new();
        let mut scheduler = Scheduler::new();
        registry
            .attach(&mut dom, &mut scheduler, handles.root, config)
            .expect("pilot markup attaches");

        Self {
            dom,
            registry,
            scheduler,
            handles,
        }
    }

    /// The attached menu.
    pub fn menu(&self) -> &Menu {
        self.registry.get(self.handles.root).expect("menu attached")
    }

    /// Mutable access to the attached menu.
    pub fn menu_mut(&mut self) -> &mut Menu {
        self.registry
            .get_mut(self.handles.root)
            .expect("menu attached")
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Dispatch one event through the registry.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), WidgetError> {
        self.registry
            .dispatch(&mut self.dom, &mut self.scheduler, event)
    }

    /// Simulate a click on a node.
    pub fn click(&mut self, target: NodeId) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::Click { target })
    }

    /// Simulate a touch contact on a node.
    pub fn touch(&mut self, target: NodeId) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::TouchStart { target })
    }

    /// Simulate the pointer entering a node.
    pub fn hover_enter(&mut self, target: NodeId) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::PointerEnter { target })
    }

    /// Simulate the pointer leaving a node.
    pub fn hover_leave(&mut self, target: NodeId) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::PointerLeave { target })
    }

    /// Simulate focus arriving on a node (moves document focus too).
    pub fn focus_in(&mut self, target: NodeId) -> Result<(), WidgetError> {
        self.dom.focus(target);
        self.dispatch(UiEvent::FocusIn { target })
    }

    /// Simulate a key released on a node.
    pub fn key(&mut self, target: NodeId, key: Key) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::KeyUp {
            target: Some(target),
            key: KeyEvent::plain(key),
        })
    }

    /// Simulate a key with modifiers released on a node.
    pub fn key_with(
        &mut self,
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::KeyUp {
            target: Some(target),
            key: KeyEvent::new(key, modifiers),
        })
    }

    /// Simulate a key released with no focused element.
    pub fn key_global(&mut self, key: Key) -> Result<(), WidgetError> {
        self.dispatch(UiEvent::KeyUp {
            target: None,
            key: KeyEvent::plain(key),
        })
    }

    /// Resize the viewport and dispatch the resize event.
    pub fn resize(&mut self, width: u32) -> Result<(), WidgetError> {
        self.dom.set_viewport_width(width);
        self.dispatch(UiEvent::Resize)
    }

    /// Advance the virtual clock, running due tasks through the registry.
    pub fn advance(&mut self, delta_ms: u64) {
        self.registry
            .advance(&mut self.dom, &mut self.scheduler, delta_ms);
    }

    /// Detach the menu from its root.
    pub fn detach(&mut self) -> Result<Menu, WidgetError> {
        self.registry.detach(&mut self.dom, self.handles.root)
    }

    // ── Inspection shorthand ─────────────────────────────────────────

    /// Attribute value on a node.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.dom.attr(node, name)
    }

    /// Whether a node carries a class.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.dom.has_class(node, class)
    }

    /// Inline style value on a node.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.dom.style(node, property)
    }

    /// The node owning document focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.dom.focused()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::ATTR_INITIALIZED;

    fn three_plain_items() -> MenuMarkup {
        MenuMarkup::new().with_items([
            ItemSpec::plain("Home", 200),
            ItemSpec::plain("Topics", 200),
            ItemSpec::plain("About", 200),
        ])
    }

    #[test]
    fn markup_builds_all_parts() {
        let mut dom = Dom::new();
        let handles = three_plain_items().build(&mut dom);
        assert!(dom.has_attr(handles.open, "data-menu-open"));
        assert!(dom.has_attr(handles.inner, "data-menu-inner"));
        assert!(dom.has_attr(handles.list, "data-menu-list"));
        assert_eq!(handles.items.len(), 3);
        assert!(handles.items[0].caret.is_none());
    }

    #[test]
    fn markup_items_with_children() {
        let mut dom = Dom::new();
        let handles = MenuMarkup::new()
            .with_items([ItemSpec::with_children("Topics", 200, 6)])
            .build(&mut dom);
        let item = &handles.items[0];
        assert!(item.caret.is_some());
        assert!(item.mega.is_some());
        assert_eq!(item.sub_links.len(), 6);
        assert!(dom.has_attr(item.node, ATTR_HAS_CHILDREN));
    }

    #[test]
    fn pilot_attaches_menu() {
        let pilot = MenuPilot::attach(three_plain_items());
        assert_eq!(pilot.attr(pilot.handles.root, ATTR_INITIALIZED), Some("true"));
        assert_eq!(pilot.menu().items().len(), 3);
        assert!(pilot.menu().display_mode().is_desktop());
    }

    #[test]
    fn pilot_resize_updates_viewport() {
        let mut pilot = MenuPilot::attach(three_plain_items());
        pilot.resize(800).unwrap();
        assert_eq!(pilot.dom.viewport_width(), 800);
    }

    #[test]
    fn pilot_advance_drains_scheduler() {
        let mut pilot = MenuPilot::attach(three_plain_items());
        assert!(!pilot.scheduler.is_idle());
        pilot.advance(1_000);
        assert!(pilot.scheduler.is_idle());
    }
}
