//! Input events and the lifecycle notifier.
//!
//! - [`input`] — host-delivered UI events and key types, decoupled from any
//!   input backend.
//! - [`notifier`] — minimal typed publish/subscribe widgets use to expose
//!   lifecycle events (`onOpen`, `onClose`, ...) to host code.

pub mod input;
pub mod notifier;

pub use input::{Key, KeyEvent, Modifiers, UiEvent};
pub use notifier::{MenuEvent, Notifier};
