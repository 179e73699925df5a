//! Derived, read-only facts about physical displays.
//!
//! Window-placement code needs to reason about *usable* screen area versus
//! *raw* screen area without re-deriving platform quirks at every call site.
//! This crate answers three questions per display:
//!
//! - [`display_id`]: the stable hardware (CoreGraphics) identifier, when the
//!   host framework provides one.
//! - [`has_dock`]: whether a persistently visible dock reserves space on this
//!   display, approximated from geometry since no direct API exists.
//! - [`has_notch`]: whether the display has a physical cutout at its top edge.
//!
//! All three are pure, synchronous reads. The inputs come in through small
//! traits ([`ScreenMetrics`], [`PreferenceReader`], [`MenuBarMetrics`]) so
//! tests can substitute fixed values; on macOS the [`macos`] module implements
//! them over AppKit.

pub mod facts;
pub mod geometry;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod menu_bar;
pub mod prefs;
pub mod screen;

pub use facts::{
    display_id, has_dock, has_dock_with_padding, has_notch, DOCK_AUTOHIDE_KEY, DOCK_PREFS_DOMAIN,
    DOCK_REVEAL_PADDING,
};
pub use geometry::Rect;
pub use menu_bar::{FixedMenuBar, MenuBarMetrics};
pub use prefs::{MemoryPrefs, PreferenceReader};
pub use screen::{
    DescriptorValue, DeviceDescription, ScreenMetrics, ScreenSnapshot, SCREEN_NUMBER_KEY,
};
