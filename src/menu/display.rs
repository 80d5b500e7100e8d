//! Display-mode detection: mobile, tablet-forced-mobile, desktop.
//!
//! Desktop rendering is not a pure media-query mirror: a phone or tablet
//! device class forces the mobile rendering regardless of viewport width.

use crate::dom::DeviceClass;

/// Viewport width (logical pixels) at which desktop rendering becomes
/// possible on desktop-class devices.
pub const DESKTOP_BREAKPOINT: u32 = 996;

// ---------------------------------------------------------------------------
// DisplayMode
// ---------------------------------------------------------------------------

/// How the menu renders, recomputed at attach and after every settled
/// resize; never cached across resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Hamburger flyout rendering.
    Mobile,
    /// Mobile rendering forced by a tablet device class, independent of
    /// width; additionally flagged on the root with a class.
    TabletForcedMobile,
    /// Horizontal desktop rendering.
    Desktop,
}

impl DisplayMode {
    /// Decide the display mode. Rules in order, first match wins:
    /// phone device → mobile; tablet device → tablet-forced-mobile;
    /// viewport narrower than [`DESKTOP_BREAKPOINT`] → mobile; otherwise
    /// desktop.
    pub fn detect(device: DeviceClass, viewport_width: u32) -> Self {
        match device {
            DeviceClass::Phone => Self::Mobile,
            DeviceClass::Tablet => Self::TabletForcedMobile,
            DeviceClass::Desktop => {
                if viewport_width < DESKTOP_BREAKPOINT {
                    Self::Mobile
                } else {
                    Self::Desktop
                }
            }
        }
    }

    /// Whether desktop behavior (hover disclosure, overflow scrolling)
    /// applies.
    #[inline]
    pub fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }

    /// Whether the mobile rendering (flyout, focus trap) applies. True for
    /// both plain mobile and tablet-forced mobile.
    #[inline]
    pub fn is_mobile_rendering(self) -> bool {
        !self.is_desktop()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
