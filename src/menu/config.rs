//! Menu configuration: selectors, labels, thresholds, input channels.

// ---------------------------------------------------------------------------
// MenuConfig
// ---------------------------------------------------------------------------

/// Attach-time configuration for a [`Menu`](super::Menu).
///
/// Selectors are data-attribute names queried within the widget root. The
/// `attach_*_listener` flags independently gate whole input channels: a
/// disabled channel means the corresponding host events are ignored by this
/// widget, the headless equivalent of never binding the listener.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuConfig {
    /// Selector for the hamburger (toggle) button.
    pub open_selector: String,
    /// Selector for the close button.
    pub close_selector: String,
    /// Selector for the back button.
    pub back_selector: String,
    /// Selector for the menu inner panel.
    pub inner_selector: String,
    /// Selector for the item list.
    pub list_selector: String,
    /// Selector for a first-level item.
    pub item_selector: String,
    /// Selector for a first-level link.
    pub link_selector: String,
    /// Selector for the previous-items scroll button.
    pub button_previous_selector: String,
    /// Selector for the next-items scroll button.
    pub button_next_selector: String,
    /// Selector for an item's caret button.
    pub caret_selector: String,
    /// Selector for an item's mega panel.
    pub mega_selector: String,
    /// Selector for a sub-item.
    pub sub_item_selector: String,
    /// Maximum text lines per item link; `0` disables line clamping.
    pub max_lines: u32,
    /// Root attribute overriding `max_lines` from the markup.
    pub max_lines_attribute: String,
    /// Root attribute carrying the toggle label while closed.
    pub label_open_attribute: String,
    /// Root attribute carrying the toggle label while open.
    pub label_close_attribute: String,
    /// Whether click events are handled.
    pub attach_click_listener: bool,
    /// Whether touch events are handled.
    pub attach_touch_listener: bool,
    /// Whether hover events are handled.
    pub attach_hover_listener: bool,
    /// Whether focus events are handled.
    pub attach_focus_listener: bool,
    /// Whether keyboard events are handled.
    pub attach_key_listener: bool,
    /// Whether resize events are handled.
    pub attach_resize_listener: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open_selector: "data-menu-open".into(),
            close_selector: "data-menu-close".into(),
            back_selector: "data-menu-back".into(),
            inner_selector: "data-menu-inner".into(),
            list_selector: "data-menu-list".into(),
            item_selector: "data-menu-item".into(),
            link_selector: "data-menu-link".into(),
            button_previous_selector: "data-menu-items-previous".into(),
            button_next_selector: "data-menu-items-next".into(),
            caret_selector: "data-menu-caret".into(),
            mega_selector: "data-menu-mega".into(),
            sub_item_selector: "data-menu-subitem".into(),
            max_lines: 2,
            max_lines_attribute: "data-menu-max-lines".into(),
            label_open_attribute: "data-menu-label-open".into(),
            label_close_attribute: "data-menu-label-close".into(),
            attach_click_listener: true,
            attach_touch_listener: true,
            attach_hover_listener: true,
            attach_focus_listener: true,
            attach_key_listener: true,
            attach_resize_listener: true,
        }
    }
}

impl MenuConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line clamp (builder). `0` disables clamping.
    pub fn with_max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Enable or disable the click channel (builder).
    pub fn with_click_listener(mut self, enabled: bool) -> Self {
        self.attach_click_listener = enabled;
        self
    }

    /// Enable or disable the touch channel (builder).
    pub fn with_touch_listener(mut self, enabled: bool) -> Self {
        self.attach_touch_listener = enabled;
        self
    }

    /// Enable or disable the hover channel (builder).
    pub fn with_hover_listener(mut self, enabled: bool) -> Self {
        self.attach_hover_listener = enabled;
        self
    }

    /// Enable or disable the focus channel (builder).
    pub fn with_focus_listener(mut self, enabled: bool) -> Self {
        self.attach_focus_listener = enabled;
        self
    }

    /// Enable or disable the keyboard channel (builder).
    pub fn with_key_listener(mut self, enabled: bool) -> Self {
        self.attach_key_listener = enabled;
        self
    }

    /// Enable or disable the resize channel (builder).
    pub fn with_resize_listener(mut self, enabled: bool) -> Self {
        self.attach_resize_listener = enabled;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
