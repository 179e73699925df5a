//! The three derived display facts.
//!
//! Each query is a pure, synchronous read over current display geometry and
//! preference state. Nothing is cached and no change notifications are
//! observed; callers re-query after a display-configuration change.

use crate::menu_bar::MenuBarMetrics;
use crate::prefs::PreferenceReader;
use crate::screen::{ScreenMetrics, SCREEN_NUMBER_KEY};

/// Preference domain of the macOS Dock.
pub const DOCK_PREFS_DOMAIN: &str = "com.apple.dock";

/// Key of the Dock's auto-hide setting within its preference domain.
pub const DOCK_AUTOHIDE_KEY: &str = "autohide";

/// Height tolerance for the strip along the screen edge that triggers
/// revealing an auto-hiding dock, in points. Empirical, not derived from any
/// platform constant.
pub const DOCK_REVEAL_PADDING: f64 = 5.0;

/// The stable hardware (CoreGraphics) ID of this display.
///
/// `None` when the host framework provides no identifier for the handle, or
/// stores it with an unexpected type. That is a normal outcome, not a fault;
/// callers fall back to a different display-matching strategy.
pub fn display_id(screen: &impl ScreenMetrics) -> Option<u32> {
    screen.device_description().u32_value(SCREEN_NUMBER_KEY)
}

/// Whether the screen has a visible dock. This isn't point-in-time visible:
/// it is true when the dock is always visible AND reserves space on this
/// screen.
pub fn has_dock(
    screen: &impl ScreenMetrics,
    prefs: &impl PreferenceReader,
    menu_bar: &impl MenuBarMetrics,
) -> bool {
    has_dock_with_padding(screen, prefs, menu_bar, DOCK_REVEAL_PADDING)
}

/// Same as [`has_dock`] with a caller-chosen reveal-strip tolerance, for
/// platforms or scale factors where the default does not fit.
pub fn has_dock_with_padding(
    screen: &impl ScreenMetrics,
    prefs: &impl PreferenceReader,
    menu_bar: &impl MenuBarMetrics,
    padding: f64,
) -> bool {
    // An auto-hiding dock never counts, whatever the geometry says.
    if prefs.bool_value(DOCK_PREFS_DOMAIN, DOCK_AUTOHIDE_KEY) == Some(true) {
        return false;
    }

    // No public API reports dock visibility directly, so compare the usable
    // area against the full frame. A narrower visible frame means something
    // is pinned to a side edge.
    let frame = screen.frame();
    let visible = screen.visible_frame();
    if visible.width < frame.width {
        return true;
    }

    // Height lost to the menu bar or the notch is not dock space. The menu
    // bar sits inside the notch inset, so take the larger of the two rather
    // than their sum.
    let reserved_top = menu_bar.menu_bar_height().max(screen.safe_area_top());
    visible.height < frame.height - reserved_top - padding
}

/// Whether the screen has a notch, i.e. a non-zero top safe-area inset.
///
/// Any top inset is assumed to be a notch, since no other situation currently
/// produces one; the platform offers no more specific signal.
pub fn has_notch(screen: &impl ScreenMetrics) -> bool {
    screen.safe_area_top() > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::menu_bar::FixedMenuBar;
    use crate::prefs::MemoryPrefs;
    use crate::screen::{DescriptorValue, DeviceDescription, ScreenSnapshot};

    /// A 1920x1080 display losing `side` points of width and `top` points of
    /// height to system chrome, with the given notch inset.
    fn screen(side: f64, top: f64, inset: f64) -> ScreenSnapshot {
        ScreenSnapshot {
            frame: Rect::with_size(1920.0, 1080.0),
            visible_frame: Rect::with_size(1920.0 - side, 1080.0 - top),
            safe_area_top: inset,
            device_description: DeviceDescription::new(),
        }
    }

    fn autohide(value: bool) -> MemoryPrefs {
        let mut prefs = MemoryPrefs::new();
        prefs.set(DOCK_PREFS_DOMAIN, DOCK_AUTOHIDE_KEY, value);
        prefs
    }

    fn no_menu() -> FixedMenuBar {
        FixedMenuBar(0.0)
    }

    // -- display_id ---------------------------------------------------------

    #[test]
    fn display_id_reads_screen_number() {
        let mut s = screen(0.0, 0.0, 0.0);
        s.device_description
            .insert(SCREEN_NUMBER_KEY, DescriptorValue::UInt(69_734_406));
        assert_eq!(display_id(&s), Some(69_734_406));
    }

    #[test]
    fn display_id_absent_without_descriptor_entry() {
        let s = screen(0.0, 0.0, 0.0);
        assert_eq!(display_id(&s), None);
    }

    #[test]
    fn display_id_absent_for_wrong_type() {
        let mut s = screen(0.0, 0.0, 0.0);
        s.device_description
            .insert(SCREEN_NUMBER_KEY, DescriptorValue::Text("1".to_string()));
        assert_eq!(display_id(&s), None);

        s.device_description
            .insert(SCREEN_NUMBER_KEY, DescriptorValue::Int(-1));
        assert_eq!(display_id(&s), None);
    }

    // -- has_dock: autohide rule --------------------------------------------

    #[test]
    fn autohiding_dock_never_counts() {
        // Geometry alone would clearly say "dock" in both directions.
        let side_docked = screen(70.0, 0.0, 0.0);
        let bottom_docked = screen(0.0, 70.0, 0.0);
        let prefs = autohide(true);
        assert!(!has_dock(&side_docked, &prefs, &no_menu()));
        assert!(!has_dock(&bottom_docked, &prefs, &no_menu()));
    }

    #[test]
    fn autohide_false_falls_through_to_geometry() {
        let s = screen(70.0, 0.0, 0.0);
        assert!(has_dock(&s, &autohide(false), &no_menu()));
    }

    #[test]
    fn autohide_absent_falls_through_to_geometry() {
        let s = screen(70.0, 0.0, 0.0);
        assert!(has_dock(&s, &MemoryPrefs::new(), &no_menu()));
    }

    // -- has_dock: width rule -----------------------------------------------

    #[test]
    fn narrower_visible_frame_means_side_dock() {
        let s = screen(1.0, 0.0, 0.0);
        assert!(has_dock(&s, &MemoryPrefs::new(), &no_menu()));
    }

    // -- has_dock: height rule ----------------------------------------------

    #[test]
    fn height_loss_at_padding_boundary() {
        let prefs = MemoryPrefs::new();
        // Exactly the reveal-strip tolerance: not a dock.
        assert!(!has_dock(&screen(0.0, 5.0, 0.0), &prefs, &no_menu()));
        // Just past it: a dock.
        assert!(has_dock(&screen(0.0, 5.01, 0.0), &prefs, &no_menu()));
    }

    #[test]
    fn full_visible_frame_has_no_dock() {
        let s = screen(0.0, 0.0, 0.0);
        assert!(!has_dock(&s, &MemoryPrefs::new(), &no_menu()));
    }

    #[test]
    fn menu_bar_height_is_not_mistaken_for_dock() {
        // The visible frame loses exactly the menu bar; no dock.
        let s = screen(0.0, 24.0, 0.0);
        assert!(!has_dock(&s, &MemoryPrefs::new(), &FixedMenuBar(24.0)));
    }

    #[test]
    fn dock_below_menu_bar_is_detected() {
        // Menu bar plus a 60-point dock.
        let s = screen(0.0, 24.0 + 60.0, 0.0);
        assert!(has_dock(&s, &MemoryPrefs::new(), &FixedMenuBar(24.0)));
    }

    #[test]
    fn notch_inset_is_not_mistaken_for_dock() {
        // A notched laptop screen with the menu bar drawn inside the inset:
        // the whole top loss is the inset, not a dock.
        let s = screen(0.0, 32.0, 32.0);
        assert!(!has_dock(&s, &MemoryPrefs::new(), &FixedMenuBar(24.0)));
    }

    #[test]
    fn custom_padding_moves_the_boundary() {
        let prefs = MemoryPrefs::new();
        let s = screen(0.0, 8.0, 0.0);
        assert!(has_dock_with_padding(&s, &prefs, &no_menu(), 5.0));
        assert!(!has_dock_with_padding(&s, &prefs, &no_menu(), 10.0));
    }

    // -- has_notch ----------------------------------------------------------

    #[test]
    fn zero_inset_means_no_notch() {
        assert!(!has_notch(&screen(0.0, 0.0, 0.0)));
    }

    #[test]
    fn any_positive_inset_means_notch() {
        assert!(has_notch(&screen(0.0, 0.0, 0.1)));
        assert!(has_notch(&screen(0.0, 32.0, 32.0)));
    }

    // -- purity --------------------------------------------------------------

    #[test]
    fn queries_are_idempotent() {
        let mut s = screen(0.0, 70.0, 32.0);
        s.device_description
            .insert(SCREEN_NUMBER_KEY, DescriptorValue::UInt(1));
        let prefs = MemoryPrefs::new();
        let menu = FixedMenuBar(24.0);

        assert_eq!(display_id(&s), display_id(&s));
        assert_eq!(has_dock(&s, &prefs, &menu), has_dock(&s, &prefs, &menu));
        assert_eq!(has_notch(&s), has_notch(&s));
    }
}
