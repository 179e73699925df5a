//! AppKit-backed implementations of the adapter's input seams.
//!
//! Everything here is a thin read over `NSScreen`, `NSUserDefaults`, and the
//! shared `NSApplication`. Screen geometry is captured into
//! [`ScreenSnapshot`]s; preference and menu-bar reads stay live so each query
//! sees current OS state.

use objc2::MainThreadMarker;
use objc2_app_kit::{NSApplication, NSScreen};
use objc2_foundation::{NSNumber, NSRect, NSString, NSUserDefaults};

use crate::geometry::Rect;
use crate::menu_bar::MenuBarMetrics;
use crate::prefs::PreferenceReader;
use crate::screen::{DescriptorValue, DeviceDescription, ScreenSnapshot, SCREEN_NUMBER_KEY};

fn rect_from_ns(rect: NSRect) -> Rect {
    Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    )
}

/// AppKit stores display IDs as unsigned 32-bit NSNumbers; keep anything in
/// that range unsigned and preserve the rest as plain integers.
fn descriptor_number(number: &NSNumber) -> DescriptorValue {
    let value = number.longLongValue();
    match u32::try_from(value) {
        Ok(v) => DescriptorValue::UInt(v),
        Err(_) => DescriptorValue::Int(value),
    }
}

/// Captures the current geometry and descriptor of one screen.
pub fn snapshot(screen: &NSScreen) -> ScreenSnapshot {
    let mut description = DeviceDescription::new();
    let device_description = screen.deviceDescription();
    let key = NSString::from_str(SCREEN_NUMBER_KEY);
    match device_description.objectForKey(&key) {
        Some(value) => {
            if let Ok(number) = value.downcast::<NSNumber>() {
                description.insert(SCREEN_NUMBER_KEY, descriptor_number(&number));
            } else {
                log::debug!("{} present but not an NSNumber", SCREEN_NUMBER_KEY);
            }
        }
        None => log::debug!("screen descriptor has no {}", SCREEN_NUMBER_KEY),
    }

    let insets = screen.safeAreaInsets();

    ScreenSnapshot {
        frame: rect_from_ns(screen.frame()),
        visible_frame: rect_from_ns(screen.visibleFrame()),
        safe_area_top: insets.top,
        device_description: description,
    }
}

/// Snapshots of every active display, in AppKit's screen order.
pub fn all_screens(mtm: MainThreadMarker) -> Vec<ScreenSnapshot> {
    NSScreen::screens(mtm)
        .iter()
        .map(|screen| snapshot(&screen))
        .collect()
}

/// Reads preference domains through `NSUserDefaults`, the same store that
/// `defaults read` shows.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDefaultsReader;

impl PreferenceReader for UserDefaultsReader {
    fn bool_value(&self, domain: &str, key: &str) -> Option<bool> {
        let defaults = NSUserDefaults::standardUserDefaults();
        let domain_values = defaults.persistentDomainForName(&NSString::from_str(domain))?;
        let value = domain_values.objectForKey(&NSString::from_str(key))?;
        let number = value.downcast::<NSNumber>().ok()?;
        Some(number.boolValue())
    }
}

/// Menu-bar height of this process's main menu, via the shared
/// `NSApplication`. Zero when the application has no main menu.
#[derive(Debug, Clone, Copy)]
pub struct AppMenuBar {
    mtm: MainThreadMarker,
}

impl AppMenuBar {
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self { mtm }
    }
}

impl MenuBarMetrics for AppMenuBar {
    fn menu_bar_height(&self) -> f64 {
        let app = NSApplication::sharedApplication(self.mtm);
        app.mainMenu()
            .map(|menu| menu.menuBarHeight())
            .unwrap_or(0.0)
    }
}
