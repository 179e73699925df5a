//! Plain geometry types shared by the adapter.
//!
//! These mirror the host framework's rect type without pulling AppKit into
//! platform-neutral code, so the derivation logic and its tests compile on
//! every target.

/// An axis-aligned rectangle in screen coordinates (points, not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}
