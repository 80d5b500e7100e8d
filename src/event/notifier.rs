//! Typed publish/subscribe notifier for widget lifecycle events.
//!
//! Every widget exposes its lifecycle (`onOpen`, `onClose`, ...) through a
//! [`Notifier`]. Host code subscribes with [`Notifier::on`]; the widget
//! publishes with [`Notifier::publish`]. Callbacks run synchronously in
//! registration order and receive the payload by reference, unchanged.
//! Event names are not validated: widgets only publish from their fixed
//! supported set, so an unknown name simply never fires.

use std::collections::HashMap;

use crate::event::input::UiEvent;

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Callback storage for a single payload type.
type Callback<P> = Box<dyn FnMut(&P)>;

/// Minimal typed publish/subscribe.
///
/// No unsubscribe exists short of dropping the notifier with its widget;
/// callback panics propagate to the caller.
pub struct Notifier<P> {
    handlers: HashMap<String, Vec<Callback<P>>>,
}

impl<P> Notifier<P> {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a callback for an event name.
    pub fn on(&mut self, event: impl Into<String>, callback: impl FnMut(&P) + 'static) {
        self.handlers
            .entry(event.into())
            .or_default()
            .push(Box::new(callback));
    }

    /// Invoke every callback registered for `event`, in registration order.
    pub fn publish(&mut self, event: &str, payload: &P) {
        if let Some(callbacks) = self.handlers.get_mut(event) {
            for callback in callbacks.iter_mut() {
                callback(payload);
            }
        }
    }

    /// Number of callbacks registered for an event name.
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }
}

impl<P> Default for Notifier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for Notifier<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut events: Vec<(&str, usize)> = self
            .handlers
            .iter()
            .map(|(name, cbs)| (name.as_str(), cbs.len()))
            .collect();
        events.sort_unstable();
        f.debug_struct("Notifier").field("events", &events).finish()
    }
}

// ---------------------------------------------------------------------------
// MenuEvent
// ---------------------------------------------------------------------------

/// Payload for menu lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuEvent {
    /// The UI event that triggered the transition, when one did (a global
    /// Escape close carries none).
    pub trigger: Option<UiEvent>,
}

impl MenuEvent {
    /// A payload triggered by the given UI event.
    pub fn from_trigger(event: UiEvent) -> Self {
        Self {
            trigger: Some(event),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
