//! Menu bar height, behind an injectable seam.
//!
//! The dock heuristic needs the height of the active application's main menu
//! bar. In AppKit that lives on a process-wide singleton; injecting it keeps
//! the derivation pure and testable.

/// Source of the current menu-bar height.
pub trait MenuBarMetrics {
    /// Height of the active application's main menu bar, zero when there is
    /// none.
    fn menu_bar_height(&self) -> f64;
}

/// A fixed menu-bar height, for tests or callers that measure it themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMenuBar(pub f64);

impl MenuBarMetrics for FixedMenuBar {
    fn menu_bar_height(&self) -> f64 {
        self.0
    }
}
