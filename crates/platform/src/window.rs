use sysbar_core::{Color, Insets};

/// Identity of a view inserted into the decor hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewId(pub u32);

/// Vertical anchor for a synthetic bar-background view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Bottom,
}

/// Window-manager flags toggled around bar colour changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowFlag {
    /// The window takes responsibility for drawing the bar backgrounds.
    DrawsSystemBarBackgrounds,
    TranslucentStatus,
    TranslucentNavigation,
}

/// Behaviour of hidden bars with respect to user swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarBehavior {
    #[default]
    Default,
    /// Hidden bars can be revealed temporarily with a swipe.
    TransientBarsBySwipe,
}

/// Point-in-time snapshot of the root window insets.
///
/// Absent entirely before the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsetSnapshot {
    pub status_bar:     Insets,
    pub navigation_bar: Insets,
    pub display_cutout: Insets,
}

impl InsetSnapshot {
    /// Union of both system bars (per-edge maximum).
    pub fn system_bars(&self) -> Insets {
        self.status_bar.max(self.navigation_bar)
    }

    /// Deprecated single-accessor view served on the oldest tier: system bars
    /// only, no display-cutout union.
    pub fn system_window(&self) -> Insets {
        self.system_bars()
    }
}

/// Modern show/hide/appearance API. A window can legitimately lack one.
pub trait InsetsController {
    fn show_system_bars(&mut self);
    fn hide_system_bars(&mut self);
    fn set_behavior(&mut self, behavior: BarBehavior);
    /// `light = true` requests the light-background appearance — dark icons —
    /// on both bars.
    fn set_appearance_light_bars(&mut self, light: bool);
}

/// The slice of a platform window the bar controller mutates.
///
/// Implementations are bound to the UI thread; every operation is synchronous
/// and none of this is `Send`.
pub trait PlatformWindow {
    fn api_level(&self) -> u32;

    /// Whether the system theme is currently dark.
    fn is_dark_mode(&self) -> bool;

    fn set_window_flag(&mut self, flag: WindowFlag, enabled: bool);

    /// `false` lays content out edge-to-edge underneath the system bars.
    fn set_decor_fits_system_windows(&mut self, fits: bool);

    // ── Direct bar colouring (refused by the OS on the newest tier) ──────────

    fn set_status_bar_color(&mut self, color: Color);
    fn set_navigation_bar_color(&mut self, color: Color);

    /// Root decor background, independent of the bar colours.
    fn set_background_color(&mut self, color: Color);

    // ── Legacy visibility bitmask ─────────────────────────────────────────────

    fn ui_visibility(&self) -> u32;
    fn set_ui_visibility(&mut self, flags: u32);

    /// Inset controller, when the OS exposes one for this window.
    fn insets_controller(&mut self) -> Option<&mut dyn InsetsController>;

    /// Latest root inset snapshot; `None` before the first layout pass.
    fn insets(&self) -> Option<InsetSnapshot>;

    // ── Decor hierarchy ───────────────────────────────────────────────────────

    /// Look a view up by its identifying tag.
    fn find_view(&self, tag: &str) -> Option<ViewId>;

    /// Insert a full-width, zero-height view anchored to `anchor` and filled
    /// with `color`.
    fn add_view(&mut self, tag: &str, anchor: Anchor, color: Color) -> ViewId;

    fn remove_view(&mut self, id: ViewId);

    fn set_view_color(&mut self, id: ViewId, color: Color);

    fn set_view_height(&mut self, id: ViewId, height: u32);
}
