//! Synthetic bar-background views, for the tier where the OS refuses direct
//! bar colouring.
//!
//! Overlays are found by tag, never by stored reference, and at most one per
//! bar ever exists. Resize and recolour are independently idempotent: a resize
//! never touches colour and a recolour never computes height from anything but
//! the current snapshot, so interleaved inset deliveries and colour changes
//! converge to the same visible result in any order.

use sysbar_core::{Color, SystemBar};
use sysbar_platform::{Anchor, InsetSnapshot, PlatformWindow};
use tracing::debug;

/// Decor-view tags identifying the two overlays. The controller is the only
/// component that may add or remove views carrying these tags.
pub const STATUS_OVERLAY_TAG: &str = "sysbar_status_overlay";
pub const NAVIGATION_OVERLAY_TAG: &str = "sysbar_navigation_overlay";

pub fn tag_for(bar: SystemBar) -> &'static str {
    match bar {
        SystemBar::Status => STATUS_OVERLAY_TAG,
        SystemBar::Navigation => NAVIGATION_OVERLAY_TAG,
    }
}

fn anchor_for(bar: SystemBar) -> Anchor {
    match bar {
        SystemBar::Status => Anchor::Top,
        SystemBar::Navigation => Anchor::Bottom,
    }
}

/// Height an overlay should occupy under `insets`. Pure function of its
/// arguments — the resize path must not read any other controller state.
pub fn overlay_height(bar: SystemBar, insets: &InsetSnapshot) -> u32 {
    match bar {
        SystemBar::Status => insets.status_bar.top,
        SystemBar::Navigation => insets.navigation_bar.bottom,
    }
}

/// Find-or-create the overlay for `bar` and fill it with `color`.
///
/// An existing view is only recoloured, never recreated — recreation would
/// flash and race with in-flight inset deliveries. Height is refreshed from
/// the current snapshot when one exists; a view created before the first
/// layout pass stays zero-height until insets arrive.
pub fn ensure_overlay(win: &mut dyn PlatformWindow, bar: SystemBar, color: Color) {
    let tag = tag_for(bar);
    let id = match win.find_view(tag) {
        Some(id) => {
            debug!("recolouring {tag} to {color}");
            win.set_view_color(id, color);
            id
        }
        None => {
            debug!("creating {tag} with {color}");
            win.add_view(tag, anchor_for(bar), color)
        }
    };

    if let Some(insets) = win.insets() {
        win.set_view_height(id, overlay_height(bar, &insets));
    }
}

/// Detach the overlay for `bar` if one exists; no-op otherwise. Used when a
/// direct-colouring strategy paints, so stale views don't occlude content.
pub fn remove_overlay_if_present(win: &mut dyn PlatformWindow, bar: SystemBar) {
    if let Some(id) = win.find_view(tag_for(bar)) {
        debug!("removing {}", tag_for(bar));
        win.remove_view(id);
    }
}

/// Paint any existing overlays fully transparent. Heights are left alone so a
/// later recolour restores the exact previous footprint.
pub fn set_overlays_transparent(win: &mut dyn PlatformWindow) {
    for bar in SystemBar::BOTH {
        if let Some(id) = win.find_view(tag_for(bar)) {
            win.set_view_color(id, Color::TRANSPARENT);
        }
    }
}

/// Resize both overlays to the live bar thickness. Never touches colour.
pub fn resize_overlays(win: &mut dyn PlatformWindow, insets: &InsetSnapshot) {
    for bar in SystemBar::BOTH {
        if let Some(id) = win.find_view(tag_for(bar)) {
            win.set_view_height(id, overlay_height(bar, insets));
        }
    }
}
