//! Core geometry types: Size, TextDirection.
//!
//! Widths and heights are measured by the host in logical pixels and attached
//! to nodes; this crate never computes layout, it only does arithmetic over
//! measurements it is given.

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A measured box size in logical pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ---------------------------------------------------------------------------
// TextDirection
// ---------------------------------------------------------------------------

/// Writing direction of the host document, read from the widget root.
///
/// All overflow geometry is expressed in the writing direction: "leading" is
/// left for `Ltr` and right for `Rtl`. The direction only decides which style
/// property receives computed offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// The style property that carries the leading-edge offset.
    pub const fn leading_property(self) -> &'static str {
        match self {
            Self::Ltr => "left",
            Self::Rtl => "right",
        }
    }

    /// The style property on the opposite, trailing side.
    pub const fn trailing_property(self) -> &'static str {
        match self {
            Self::Ltr => "right",
            Self::Rtl => "left",
        }
    }

    /// Whether this is the right-to-left direction.
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
