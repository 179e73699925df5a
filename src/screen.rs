//! The read side of a physical display.
//!
//! [`ScreenMetrics`] is the seam between the derivation logic and the host
//! framework: the macOS backend implements it over `NSScreen`, tests implement
//! it with fixed values. The adapter never creates or mutates a display; it
//! only reads these four attributes.

use std::collections::HashMap;

use crate::geometry::Rect;

/// Device-descriptor key under which AppKit stores the CoreGraphics display ID.
pub const SCREEN_NUMBER_KEY: &str = "NSScreenNumber";

/// A value stored in a display's device descriptor.
///
/// The variants keep the platform's dynamic typing observable: a display ID is
/// only usable when it arrives as [`DescriptorValue::UInt`], and a lookup that
/// finds any other variant is treated the same as a missing key.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorValue {
    /// A non-negative integer representable in 32 bits.
    UInt(u32),
    /// Any other integer.
    Int(i64),
    Float(f64),
    Text(String),
}

/// The platform's key-value description of a display's hardware.
#[derive(Debug, Clone, Default)]
pub struct DeviceDescription {
    entries: HashMap<String, DescriptorValue>,
}

impl DeviceDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: DescriptorValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&DescriptorValue> {
        self.entries.get(key)
    }

    /// The value under `key`, only if it is stored as an unsigned 32-bit
    /// integer. Missing keys and other value types both yield `None`.
    pub fn u32_value(&self, key: &str) -> Option<u32> {
        match self.get(key) {
            Some(DescriptorValue::UInt(n)) => Some(*n),
            _ => None,
        }
    }
}

/// Read-only geometry of one physical display, as reported by the host
/// framework at the moment of the call.
pub trait ScreenMetrics {
    /// The full rectangle of the display.
    fn frame(&self) -> Rect;

    /// The subset of [`frame`](Self::frame) currently usable by application
    /// windows, after the OS reserves space for system chrome it knows about.
    fn visible_frame(&self) -> Rect;

    /// Distance from the physical top edge to the first fully unobstructed
    /// pixel row. Zero on displays without a cutout.
    fn safe_area_top(&self) -> f64;

    /// The hardware descriptor mapping for this display.
    fn device_description(&self) -> DeviceDescription;
}

/// A fixed capture of one display's geometry.
///
/// The macOS backend produces these from live `NSScreen` handles; tests build
/// them directly. Snapshots do not track later display-configuration changes,
/// so callers re-snapshot when they need current values.
#[derive(Debug, Clone, Default)]
pub struct ScreenSnapshot {
    pub frame: Rect,
    pub visible_frame: Rect,
    pub safe_area_top: f64,
    pub device_description: DeviceDescription,
}

impl ScreenMetrics for ScreenSnapshot {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn visible_frame(&self) -> Rect {
        self.visible_frame
    }

    fn safe_area_top(&self) -> f64 {
        self.safe_area_top
    }

    fn device_description(&self) -> DeviceDescription {
        self.device_description.clone()
    }
}
