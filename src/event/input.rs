//! Input event types delivered by the host.
//!
//! Defines [`Key`], [`Modifiers`] and [`UiEvent`]. The host environment (a
//! browser shim, a test pilot, an embedding) translates its native events
//! into these; the widgets never depend on an input backend.

use std::ops::{BitAnd, BitOr};

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// UiEvent
// ---------------------------------------------------------------------------

/// A host-delivered UI event.
///
/// Pointer events carry the node they landed on; key events carry the node
/// that owned focus when the key was released (`None` for a press with no
/// focused element, which still reaches document-level handlers). Resize
/// carries no payload — the host updates the viewport width on the document
/// before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer click on a node.
    Click { target: NodeId },
    /// Touch contact started on a node. Fires before the synthetic hover and
    /// click that touch input generates.
    TouchStart { target: NodeId },
    /// Pointer entered a node (hover on).
    PointerEnter { target: NodeId },
    /// Pointer left a node (hover off).
    PointerLeave { target: NodeId },
    /// A node received document focus.
    FocusIn { target: NodeId },
    /// Key released.
    KeyUp {
        target: Option<NodeId>,
        key: KeyEvent,
    },
    /// Viewport resized.
    Resize,
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::SHIFT.is_empty());
    }

    #[test]
    fn modifiers_bitor_contains() {
        let both = Modifiers::SHIFT | Modifiers::CTRL;
        assert!(both.contains(Modifiers::SHIFT));
        assert!(both.contains(Modifiers::CTRL));
        assert!(!both.contains(Modifiers::ALT));
        assert!(both.contains(Modifiers::NONE));
    }

    #[test]
    fn modifiers_bitand() {
        let both = Modifiers::SHIFT | Modifiers::ALT;
        assert_eq!(both & Modifiers::SHIFT, Modifiers::SHIFT);
        assert_eq!(both & Modifiers::CTRL, Modifiers::NONE);
    }

    #[test]
    fn key_event_plain() {
        let e = KeyEvent::plain(Key::Escape);
        assert_eq!(e.code, Key::Escape);
        assert!(e.modifiers.is_empty());
    }

    #[test]
    fn key_event_with_modifiers() {
        let e = KeyEvent::new(Key::Tab, Modifiers::SHIFT);
        assert!(e.modifiers.contains(Modifiers::SHIFT));
    }
}
