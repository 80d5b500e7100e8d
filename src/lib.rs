//! # menukit
//!
//! Accessible, framework-free disclosure navigation widgets that attach
//! behavior to an already-rendered document tree. The core widget is the
//! responsive [`Menu`](menu::Menu): a disclosure machine over click, hover,
//! touch and keyboard input with touch/hover disambiguation, a display-mode
//! detector that is not purely breakpoint-driven, a horizontal-overflow
//! scroller over measured geometry, roving-focus keyboard navigation, and
//! focus containment for the mobile flyout.
//!
//! The crate is headless: the host document is an in-crate arena tree, the
//! host supplies measured geometry and delivers input events, and every
//! observable widget effect is an attribute/class/style/text/focus mutation
//! whose names and values are the public contract.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed host-document arena with scoped
//!   data-attribute queries, document focus, viewport metadata
//! - **[`event`]** — Host-delivered UI events and the typed lifecycle
//!   notifier (`onOpen`, `onClose`)
//! - **[`schedule`]** — Virtual-clock scheduler for the debounced resize and
//!   the one-shot settle deferrals
//! - **[`registry`]** — Root-element → widget-instance registry routing
//!   events and due tasks
//! - **[`menu`]** — The disclosure-navigation widget itself
//! - **[`error`]** — Error taxonomy shared by all widgets
//! - **[`testing`]** — Headless pilot harness and DOM outline snapshots

// Foundation
pub mod geometry;

// Core systems
pub mod dom;
pub mod error;
pub mod event;
pub mod schedule;

// Widgets
pub mod menu;
pub mod registry;

// Test support
pub mod testing;

pub use dom::{DeviceClass, Dom, NodeData, NodeId};
pub use error::WidgetError;
pub use event::{Key, KeyEvent, Modifiers, UiEvent};
pub use menu::{DisplayMode, Menu, MenuConfig};
pub use registry::ComponentRegistry;
pub use schedule::{Scheduler, Task};
