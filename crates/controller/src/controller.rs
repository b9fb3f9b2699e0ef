use sysbar_core::{resolve, BarState, BarStyle, Color, Insets, SystemBar, Visibility};
use sysbar_platform::{ApiTier, InsetSnapshot, PlatformWindow, WindowFlag};
use tracing::{debug, info};

use crate::renderer::{self, BarRenderer};

/// Owns the requested appearance and replays it through the active rendering
/// strategy on every change.
///
/// All operations are UI-thread synchronous. Missing platform services are
/// logged and skipped; none of the operations surface an error to the caller.
pub struct BarController {
    state: BarState,
    tier: ApiTier,
    renderer: Box<dyn BarRenderer>,
}

impl BarController {
    /// Detect the capability tier for `api_level` and pick the rendering
    /// strategy once.
    pub fn new(api_level: u32) -> Self {
        let tier = ApiTier::detect(api_level);
        info!("bar controller for API level {api_level} ({tier:?})");
        Self {
            state: BarState::default(),
            tier,
            renderer: renderer::for_tier(tier),
        }
    }

    pub fn state(&self) -> &BarState {
        &self.state
    }

    pub fn tier(&self) -> ApiTier {
        self.tier
    }

    /// One-time window setup: lay content out edge-to-edge and apply the
    /// system-theme default style.
    pub fn attach(&mut self, win: &mut dyn PlatformWindow) {
        win.set_decor_fits_system_windows(false);
        self.apply_default_style(win);
    }

    /// Apply `DARK` or `LIGHT` from the current system theme.
    pub fn apply_default_style(&mut self, win: &mut dyn PlatformWindow) {
        let tag = if win.is_dark_mode() { "DARK" } else { "LIGHT" };
        debug!("system theme default style: {tag}");
        self.set_style(win, tag, None);
    }

    /// Resolve and apply icon contrast and bar colours, persisting the
    /// request first so later show/re-apply calls can replay it without the
    /// caller's arguments.
    pub fn set_style(
        &mut self,
        win: &mut dyn PlatformWindow,
        style_tag: &str,
        color_hex: Option<&str>,
    ) {
        debug!("set_style: style={style_tag}, color={color_hex:?}");

        // Colour changes require the window to own the bar backgrounds.
        win.set_window_flag(WindowFlag::DrawsSystemBarBackgrounds, true);
        win.set_window_flag(WindowFlag::TranslucentStatus, false);
        win.set_window_flag(WindowFlag::TranslucentNavigation, false);

        let style = BarStyle::from_tag(style_tag);
        let resolved = resolve(style, color_hex, win.is_dark_mode());

        // Write through to stored state before touching the screen.
        self.state.style = style;
        self.state.custom_color = color_hex.map(str::to_owned);
        self.state.status_bar_color = resolved.status_bar;
        self.state.nav_bar_color = resolved.nav_bar;

        self.renderer.set_icon_appearance(win, resolved.dark_icons);
        self.renderer
            .apply_bar_color(win, SystemBar::Status, resolved.status_bar);
        self.renderer
            .apply_bar_color(win, SystemBar::Navigation, resolved.nav_bar);
    }

    /// Reveal both bars and re-apply the stored style and colours.
    /// Idempotent: showing while shown just re-applies.
    pub fn show(&mut self, win: &mut dyn PlatformWindow, animated: bool) {
        debug!("show: animated={animated} (no distinct animated path)");
        self.renderer.set_visibility(win, true);

        // Mandatory re-apply: without it the bars reappear colourless after a
        // hide/show cycle. Icon contrast is recomputed — the Default style may
        // have tracked a theme change while hidden — but colours come from the
        // stored fields, not a fresh resolution.
        let resolved = resolve(
            self.state.style,
            self.state.custom_color.as_deref(),
            win.is_dark_mode(),
        );
        self.renderer.set_icon_appearance(win, resolved.dark_icons);
        self.renderer
            .apply_bar_color(win, SystemBar::Status, self.state.status_bar_color);
        self.renderer
            .apply_bar_color(win, SystemBar::Navigation, self.state.nav_bar_color);

        self.state.visibility = Visibility::Shown;
    }

    /// Hide both bars and paint their backgrounds transparent. Stored colours
    /// are untouched so a later `show` restores them exactly.
    pub fn hide(&mut self, win: &mut dyn PlatformWindow, animated: bool) {
        debug!("hide: animated={animated} (no distinct animated path)");
        self.renderer.set_visibility(win, false);
        self.renderer.set_bars_transparent(win);
        self.state.visibility = Visibility::Hidden;
    }

    /// `overlay = true` lets content extend underneath the system bars.
    pub fn set_overlays_content(&mut self, win: &mut dyn PlatformWindow, overlay: bool) {
        debug!("set_overlays_content: overlay={overlay}");
        win.set_decor_fits_system_windows(!overlay);
    }

    /// Paint the root content background. Independent of the bar colours;
    /// unparsable input falls back to white.
    pub fn set_background(&mut self, win: &mut dyn PlatformWindow, color_hex: &str) {
        let color = Color::parse_or(Some(color_hex), Color::WHITE);
        debug!("set_background: {color}");
        win.set_background_color(color);
    }

    /// Current safe-area insets in pixels; zero on every edge before the
    /// first layout pass. Hiding the bars does not change the reported
    /// values — they track logical bar thickness, not visibility.
    pub fn safe_area_insets(&self, win: &dyn PlatformWindow) -> Insets {
        let Some(snapshot) = win.insets() else {
            debug!("safe_area_insets: no snapshot yet");
            return Insets::ZERO;
        };
        if self.tier.legacy_insets() {
            snapshot.system_window()
        } else {
            snapshot.system_bars().max(snapshot.display_cutout)
        }
    }

    /// Inset delivery from the windowing system. Resizes overlay views to the
    /// live bar thickness; never recolours.
    pub fn insets_changed(&mut self, win: &mut dyn PlatformWindow, insets: &InsetSnapshot) {
        self.renderer.insets_changed(win, insets);
    }
}
