//! The responsive disclosure-navigation widget.
//!
//! Behavior attaches to host markup carrying the role data-attributes below;
//! every externally visible effect is an attribute, class, style, text or
//! focus mutation on the host document. Attribute and class names are part
//! of the public contract — stylesheets key off them.
//!
//! - [`config`] — attach-time configuration (selectors, labels, thresholds,
//!   input-channel flags).
//! - [`display`] — mobile/tablet/desktop display-mode detection.
//! - [`item`] — per-item state (visibility and expansion axes).
//! - [`overflow`] — horizontal overflow measurement, scrolling, mega-panel
//!   placement.
//! - [`disclosure`] — the open/close state machine over click, hover and
//!   touch input.
//! - [`keyboard`] — roving-focus arrow/escape navigation.
//! - [`focus_trap`] — focus containment for the mobile flyout.
//! - [`widget`] — the [`Menu`] itself: attach, teardown, event routing.

pub mod config;
pub mod display;
pub mod disclosure;
pub mod focus_trap;
pub mod item;
pub mod keyboard;
pub mod overflow;
pub mod widget;

pub use config::MenuConfig;
pub use display::DisplayMode;
pub use focus_trap::FocusTrap;
pub use item::{MenuItem, Visibility};
pub use overflow::OverflowWindow;
pub use widget::Menu;

// ---------------------------------------------------------------------------
// Markup contract
// ---------------------------------------------------------------------------
// Fixed attribute and class names the widget reads and writes. The role
// selectors (open/close/item/...) default to the `data-menu-*` family but can
// be overridden per widget through `MenuConfig`.

/// Marker attribute set on the root once attach completed.
pub const ATTR_INITIALIZED: &str = "data-auto-initialized";
/// Marker attribute on items that own a sub-panel.
pub const ATTR_HAS_CHILDREN: &str = "data-menu-has-children";
/// Visibility marker written during overflow computation: `"true"` on fully
/// visible items, absent otherwise.
pub const ATTR_ITEM_VISIBLE: &str = "data-menu-item-visible";
/// Expansion state attribute, on the root, items and carets.
pub const ATTR_EXPANDED: &str = "aria-expanded";
/// Hidden state attribute on the inner panel.
pub const ATTR_HIDDEN: &str = "aria-hidden";

/// Root class for right-to-left documents.
pub const CLASS_RTL: &str = "menu--rtl";
/// Root class while a tablet forces the mobile rendering.
pub const CLASS_FORCED_MOBILE: &str = "menu--forced-mobile";
/// Root class enabling CSS transitions, set once layout settled.
pub const CLASS_TRANSITION: &str = "menu--transition";
/// Root class while focus containment is active.
pub const CLASS_TRAP_ACTIVE: &str = "trap-is-active";
/// Inner-panel class while a mobile item is expanded.
pub const CLASS_INNER_EXPANDED: &str = "menu__inner--expanded";
/// Inner-panel class while items overflow horizontally.
pub const CLASS_INNER_HAS_OVERFLOW: &str = "menu__inner--has-overflow";
/// Item class while expanded in the mobile flyout.
pub const CLASS_ITEM_EXPANDED: &str = "menu__item--expanded";
/// Current-page marker class; also applied to a scroll button hiding it.
pub const CLASS_ITEM_CURRENT: &str = "menu__item--current";
/// Mega-panel column classes, keyed by sub-item count.
pub const CLASS_ITEM_COL1: &str = "menu__item--col1";
pub const CLASS_ITEM_COL2: &str = "menu__item--col2";
pub const CLASS_ITEM_COL3: &str = "menu__item--col3";
/// Full-width mega-panel class.
pub const CLASS_ITEM_FULL: &str = "menu__item--full";
/// Mega-panel class flipping it to trailing-edge anchoring.
pub const CLASS_MEGA_ALIGN_END: &str = "menu__mega--align-end";
/// Body class while the mobile flyout locks page scrolling.
pub const CLASS_NO_SCROLL: &str = "no-scroll";
/// Class identifying the link inside each sub-item.
pub const CLASS_SUB_LINK: &str = "menu__sublink";
/// Class identifying the text label inside the toggle button.
pub const CLASS_BUTTON_LABEL: &str = "button__label";
/// Class identifying the mobile backdrop overlay.
pub const CLASS_OVERLAY: &str = "menu__overlay";
/// Class identifying the site header the overlay aligns below.
pub const CLASS_SITE_HEADER: &str = "site-header__header";
