//! Rendering strategies behind the controller.
//!
//! The concrete strategy is selected once, at controller construction, from
//! the detected capability tier — call paths never re-branch on API level.

use sysbar_core::{Color, SystemBar};
use sysbar_platform::{flags, ApiTier, BarBehavior, InsetSnapshot, PlatformWindow};
use tracing::{debug, warn};

use crate::overlay;

/// Polymorphic rendering capability: paints bar backgrounds, toggles bar
/// visibility, and sets icon contrast through whichever mechanism the active
/// tier supports.
pub trait BarRenderer {
    /// Paint one bar's background with `color`.
    fn apply_bar_color(&mut self, win: &mut dyn PlatformWindow, bar: SystemBar, color: Color);

    /// Show or hide both system bars.
    fn set_visibility(&mut self, win: &mut dyn PlatformWindow, visible: bool);

    /// Icon tint — `dark_icons = true` for light bar backgrounds.
    fn set_icon_appearance(&mut self, win: &mut dyn PlatformWindow, dark_icons: bool);

    /// Paint both bar backgrounds fully transparent: the hidden rendering
    /// state. Stored colours are not this layer's concern.
    fn set_bars_transparent(&mut self, win: &mut dyn PlatformWindow);

    /// Inset delivery from the windowing system. Resizes synthetic views
    /// where applicable; never recolours anything.
    fn insets_changed(&mut self, win: &mut dyn PlatformWindow, insets: &InsetSnapshot);
}

/// Select the strategy for a capability tier.
pub fn for_tier(tier: ApiTier) -> Box<dyn BarRenderer> {
    match tier {
        ApiTier::SyntheticOverlay => Box::new(OverlayRenderer),
        ApiTier::InsetControl => Box::new(DirectRenderer {
            legacy_visibility: false,
        }),
        ApiTier::LegacyFlags => Box::new(DirectRenderer {
            legacy_visibility: true,
        }),
    }
}

/// Colours set straight on the window. Visibility and icon tint go through
/// the inset controller, or the legacy flag bitmask on the oldest tier.
pub struct DirectRenderer {
    /// Decided once from the tier; never re-derived per call.
    pub(crate) legacy_visibility: bool,
}

impl BarRenderer for DirectRenderer {
    fn apply_bar_color(&mut self, win: &mut dyn PlatformWindow, bar: SystemBar, color: Color) {
        // A leftover synthetic view from a higher tier would occlude the
        // directly-coloured bar.
        overlay::remove_overlay_if_present(win, bar);
        match bar {
            SystemBar::Status => win.set_status_bar_color(color),
            SystemBar::Navigation => win.set_navigation_bar_color(color),
        }
    }

    fn set_visibility(&mut self, win: &mut dyn PlatformWindow, visible: bool) {
        if self.legacy_visibility {
            set_visibility_via_flags(win, visible);
        } else {
            set_visibility_via_controller(win, visible);
        }
    }

    fn set_icon_appearance(&mut self, win: &mut dyn PlatformWindow, dark_icons: bool) {
        if self.legacy_visibility {
            set_icons_via_flags(win, dark_icons);
        } else {
            set_icons_via_controller(win, dark_icons);
        }
    }

    fn set_bars_transparent(&mut self, win: &mut dyn PlatformWindow) {
        win.set_status_bar_color(Color::TRANSPARENT);
        win.set_navigation_bar_color(Color::TRANSPARENT);
    }

    fn insets_changed(&mut self, _win: &mut dyn PlatformWindow, _insets: &InsetSnapshot) {
        // No synthetic views to size.
    }
}

/// Bar backgrounds drawn with synthetic decor views; visibility and icon
/// tint via the inset controller.
pub struct OverlayRenderer;

impl BarRenderer for OverlayRenderer {
    fn apply_bar_color(&mut self, win: &mut dyn PlatformWindow, bar: SystemBar, color: Color) {
        overlay::ensure_overlay(win, bar, color);
    }

    fn set_visibility(&mut self, win: &mut dyn PlatformWindow, visible: bool) {
        set_visibility_via_controller(win, visible);
    }

    fn set_icon_appearance(&mut self, win: &mut dyn PlatformWindow, dark_icons: bool) {
        set_icons_via_controller(win, dark_icons);
    }

    fn set_bars_transparent(&mut self, win: &mut dyn PlatformWindow) {
        overlay::set_overlays_transparent(win);
    }

    fn insets_changed(&mut self, win: &mut dyn PlatformWindow, insets: &InsetSnapshot) {
        overlay::resize_overlays(win, insets);
    }
}

// ── Shared mechanisms ─────────────────────────────────────────────────────────

fn set_visibility_via_controller(win: &mut dyn PlatformWindow, visible: bool) {
    let Some(controller) = win.insets_controller() else {
        warn!("window has no insets controller; visibility change skipped");
        return;
    };
    debug!("insets controller: visible={visible}");
    if visible {
        controller.show_system_bars();
    } else {
        controller.hide_system_bars();
    }
    // Hidden bars stay revealable with a transient swipe.
    controller.set_behavior(BarBehavior::TransientBarsBySwipe);
}

fn set_visibility_via_flags(win: &mut dyn PlatformWindow, visible: bool) {
    debug!("legacy flags: visible={visible}");
    if visible {
        win.set_ui_visibility(flags::SYSTEM_UI_VISIBLE);
    } else {
        win.set_ui_visibility(flags::IMMERSIVE_HIDE_BUNDLE);
    }
}

fn set_icons_via_controller(win: &mut dyn PlatformWindow, dark_icons: bool) {
    let Some(controller) = win.insets_controller() else {
        warn!("window has no insets controller; icon appearance skipped");
        return;
    };
    // Dark icons are the light-background appearance.
    controller.set_appearance_light_bars(dark_icons);
}

fn set_icons_via_flags(win: &mut dyn PlatformWindow, dark_icons: bool) {
    let mut current = win.ui_visibility();
    if dark_icons {
        current |= flags::LIGHT_BARS_MASK;
    } else {
        current &= !flags::LIGHT_BARS_MASK;
    }
    win.set_ui_visibility(current);
}
